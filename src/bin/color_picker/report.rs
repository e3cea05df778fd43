use lib::{swatch::format_component, PickerView};

pub fn print_view(view: &PickerView) {
    println!(
        "hue {}  brightness {}  gamut {}",
        format_component(Some(view.state.hue())),
        format_component(Some(view.state.brightness())),
        view.state.gamut()
    );
    println!(
        "reticule ({}, {})",
        format_component(Some(view.reticule.x)),
        format_component(Some(view.reticule.y))
    );

    match view.wheel_color {
        Some(c) => println!(
            "wheel    {} {} {}",
            format_component(Some(c.red)),
            format_component(Some(c.green)),
            format_component(Some(c.blue))
        ),
        None => println!("wheel"),
    }

    match view.swatch {
        Some(ref readout) => println!("{}", readout),
        None => println!("swatch unavailable"),
    }
}
