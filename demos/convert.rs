use tinct::{Color, Model};

fn main() {
    let inputs = [
        "rgb(255, 87, 51)",
        "rgba(255,87,51,0.8)",
        "#FF5733",
        "hsl(120, 100%, 50%)",
        "hsla(240,100%,50%,0.5)",
        "hsv(300,100,100)",
        "cmyk(0%,66%,80%,0%)",
    ];

    for input in inputs {
        let color: Color = match input.parse() {
            Ok(color) => color,
            Err(err) => {
                eprintln!("{input}: {err}");
                continue;
            }
        };

        println!("{input} ({})", color.model());
        for model in Model::ALL {
            println!("  {:>5} = {}", model.name(), color.to_model(model));
        }
    }
}
