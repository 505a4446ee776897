use binseam::config::CarveOptions;
use binseam::convert::{check_direction, load_image, save_image, Direction};
use binseam::{compute_energy, SeamCarver};
use std::process;

extern crate clap;
extern crate env_logger;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use failure::Error;
use log::info;

fn carve(matches: &ArgMatches) -> Result<(), Error> {
    let options = CarveOptions::from_matches(matches)?;
    options.prepare_output_dir()?;

    let image = load_image(options.input())?;
    info!(
        "carving {} seams from {} ({}x{})",
        options.seams,
        options.input().display(),
        image.height(),
        image.width()
    );

    let mut carver = SeamCarver::new(image);
    carver.carve(options.seams, |i, grid| {
        let path = options.output_path(i, "bin");
        save_image(&path, grid)?;
        println!("{}", path.display());
        if options.png {
            save_image(options.output_path(i, "png"), grid)?;
        }
        Ok(())
    })?;
    Ok(())
}

fn energy(matches: &ArgMatches) -> Result<(), Error> {
    let (input, output) = (required(matches, "input")?, required(matches, "output")?);
    let image = load_image(input)?;
    let energy = compute_energy(&image)?;
    save_image(output, energy.as_grid())?;
    Ok(())
}

fn convert(matches: &ArgMatches, direction: Direction) -> Result<(), Error> {
    let (input, output) = (required(matches, "input")?, required(matches, "output")?);
    check_direction(direction, input, output)?;
    save_image(output, &load_image(input)?)?;
    Ok(())
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, Error> {
    matches
        .value_of(name)
        .ok_or_else(|| failure::err_msg(format!("missing argument <{}>", name)))
}

fn in_out(name: &'static str, about: &'static str) -> App<'static, 'static> {
    SubCommand::with_name(name)
        .about(about)
        .arg(
            Arg::with_name("input")
                .help("The image to read")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result")
                .required(true)
                .index(2),
        )
}

fn main() {
    let matches = App::new("binseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Seam carving for RGB rasters")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .global(true)
                .help("Log every carving stage"),
        )
        .subcommand(
            SubCommand::with_name("carve")
                .about("Remove vertical seams, saving the image after every pass")
                .arg(
                    Arg::with_name("input")
                        .help("The image to carve (.bin or any common format)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("seams")
                        .short("n")
                        .long("seams")
                        .takes_value(true)
                        .help("How many seams to remove [default: 5]"),
                )
                .arg(
                    Arg::with_name("output-dir")
                        .short("o")
                        .long("output-dir")
                        .takes_value(true)
                        .help("Directory for the per-pass images [default: .]"),
                )
                .arg(
                    Arg::with_name("prefix")
                        .long("prefix")
                        .takes_value(true)
                        .help("File name prefix for the per-pass images [default: img]"),
                )
                .arg(
                    Arg::with_name("png")
                        .long("png")
                        .help("Also write a PNG of every pass"),
                ),
        )
        .subcommand(in_out("energy", "Write the energy map of an image"))
        .subcommand(in_out("png2bin", "Convert an image to the .bin raster format"))
        .subcommand(in_out("bin2png", "Convert a .bin raster to an ordinary image"))
        .get_matches();

    let verbose = matches.is_present("verbose")
        || matches
            .subcommand()
            .1
            .map_or(false, |sub| sub.is_present("verbose"));
    let level = if verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match matches.subcommand() {
        ("carve", Some(sub)) => carve(sub),
        ("energy", Some(sub)) => energy(sub),
        ("png2bin", Some(sub)) => convert(sub, Direction::ToBin),
        ("bin2png", Some(sub)) => convert(sub, Direction::FromBin),
        _ => Err(failure::err_msg("no subcommand given")),
    };

    if let Err(e) = result {
        eprintln!("binseam: {}", e);
        process::exit(1);
    }
}
