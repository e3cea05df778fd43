mod report;

use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};
use log::info;

use lib::{
    job_helpers, picker::PickerState, settings, settings::Settings, DisplayGamut, Gamut,
    GamutConverter, PickerView, RgbColor,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("Color Picker")
        .version(VERSION)
        .about("Picks wide-gamut colors from a hue wheel")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("Settings file to load")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("gamut")
                .short("g")
                .long("gamut")
                .value_name("GAMUT")
                .help("Gamut to pick in")
                .possible_values(&["srgb", "p3"])
                .takes_value(true),
        )
        .arg(
            Arg::with_name("display-gamut")
                .long("display-gamut")
                .value_name("GAMUT")
                .help("What the display supports, used when no gamut is selected")
                .possible_values(&["unspecified", "srgb", "p3"])
                .takes_value(true),
        )
        .arg(
            Arg::with_name("brightness")
                .short("b")
                .long("brightness")
                .value_name("BRIGHTNESS")
                .help("Brightness in [0, 1]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("swatch-out")
                .short("o")
                .long("swatch-out")
                .value_name("FILE")
                .help("Write the final swatch as a PPM image")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("POINT")
                .help("Pointer positions on the wheel, as \"x,y\"")
                .multiple(true)
                .index(1),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = match matches.value_of("config") {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    // Command line overrides the settings file.
    if let Some(text) = matches.value_of("gamut") {
        settings.gamut = Gamut::from_str(text);
    }
    if let Some(text) = matches.value_of("display-gamut") {
        settings.display_gamut = DisplayGamut::from_str(text).unwrap_or_default();
    }
    if let Some(text) = matches.value_of("brightness") {
        settings.brightness = Some(text.parse::<f64>()?);
    }

    let converter = GamutConverter::new();
    let circle = settings.wheel_circle();

    let start_color = RgbColor::from_components(settings.start_color, Gamut::Standard);
    let mut state = PickerState::from_color(&start_color, settings.gamut(), &converter)?;
    if let Some(brightness) = settings.brightness {
        state = state.with_brightness(brightness)?;
    }
    info!(
        "Picking in {} on a {}x{} wheel",
        state.gamut(),
        settings.wheel_size.0,
        settings.wheel_size.1
    );

    report::print_view(&PickerView::of(state, state.reticule(circle), &converter));

    for text in matches.values_of("POINT").into_iter().flatten() {
        let point = settings::parse_point(text)?;
        let (next, reticule) = state.pointer_moved(point, circle);
        state = next;

        println!();
        println!("pointer ({}, {})", point.x, point.y);
        report::print_view(&PickerView::of(state, reticule, &converter));
    }

    if let Some(path) = matches.value_of("swatch-out") {
        let queue = job_queue::JobQueue::new();
        let color = state.swatch_color(&converter)?;
        let job = job_helpers::render_swatch_to_file(
            &queue,
            color,
            settings.swatch_size,
            PathBuf::from(path),
        );

        match job.wait() {
            Some(Ok(path)) => info!("Swatch written to \"{}\"", path.display()),
            Some(Err(e)) => return Err(e.into()),
            None => return Err("swatch render job failed".into()),
        }
    }

    Ok(())
}
