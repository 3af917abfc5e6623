use proc_macro::TokenStream;
use quote::quote;

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic, every channel has a concrete storage type.")
        }
        .into();
    }

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Models must have named fields, one for each channel of the color.")
        }
        .into();
    };

    if !(3..=4).contains(&named.named.len()) {
        return quote! {
            compile_error!("Models must have 3 or 4 fields, one for each channel of the color.")
        }
        .into();
    }

    let channel_type = named.named[0].ty.clone();
    if named.named.iter().any(|f| f.ty != channel_type) {
        return quote! {
            compile_error!("All the channels of a model must have the same type.")
        }
        .into();
    }

    // Make sure the channels are public.
    named.named.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let field_names = named
        .named
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<proc_macro2::Ident>>();
    let channel_count = field_names.len();

    if input.attrs.iter().any(|attr| attr.path().is_ident("derive")) {
        return quote! {
            compile_error!("Models get their derives from `gen_model!`, remove the `#[derive]` attribute.")
        }
        .into();
    }

    input.attrs.push(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    });

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color from its channel values.
            pub const fn new(#(#field_names: #channel_type),*) -> Self {
                Self { #(#field_names),* }
            }

            /// Return the channel values of this color in declaration order.
            pub const fn to_channels(&self) -> [#channel_type; #channel_count] {
                [#(self.#field_names),*]
            }
        }

        impl From<[#channel_type; #channel_count]> for #struct_name {
            fn from(value: [#channel_type; #channel_count]) -> Self {
                let [#(#field_names),*] = value;
                Self::new(#(#field_names),*)
            }
        }

        impl crate::color::HasModel for #struct_name {
            const MODEL: crate::color::Model = crate::color::Model::#struct_name;
        }

        impl From<#struct_name> for crate::color::Color {
            fn from(value: #struct_name) -> Self {
                crate::color::Color::#struct_name(value)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
