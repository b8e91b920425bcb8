use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::*;
use serde::Deserialize;
use structopt::StructOpt;

use menucard::{
    Appetizer, CookingMethod, CuisineType, Dessert, FlavorProfile, MainCourse, Menu, MenuItem,
    ServingStyle, SideCategory, SideDish,
};

#[derive(Debug, StructOpt)]
#[structopt(name = "menucard", about = "Menucard CLI")]
struct Opt {
    /// Configuration file
    #[structopt(parse(from_os_str))]
    config: PathBuf,
    #[structopt(subcommand)]
    command: Commands,
}

#[derive(Debug, StructOpt)]
enum Commands {
    /// Write the built-in sample menu to the configured path
    #[structopt(name = "init")]
    Init,
    /// Print every item on the card
    #[structopt(name = "show-menu")]
    ShowMenu,
}

#[derive(Deserialize, Debug)]
struct Config {
    #[serde(flatten)]
    menucard: menucard::config::Config,
    env_logger: menucard::config::EnvLogger,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    let mut config_buf = String::new();
    File::open(&opt.config)
        .with_context(|| format!("open config {:?}", opt.config))?
        .read_to_string(&mut config_buf)?;
    let config: Config = toml::from_str(&config_buf).context("parse config")?;

    config.env_logger.builder().init();

    match opt.command {
        Commands::Init => {
            let menu = sample_menu();
            config.menucard.menu.store(&menu)?;
            info!("Wrote sample menu to {:?}", config.menucard.menu.path);
        }
        Commands::ShowMenu => {
            let menu = config.menucard.menu.load()?;
            debug!("Loaded {} items", menu.len());
            show_menu(&menu);
        }
    }

    Ok(())
}

fn show_menu(menu: &Menu) {
    for appetizer in menu.appetizers() {
        print!("{}", appetizer);
        println!("Spiciness Level: {}", appetizer.spiciness_level());
        println!("Serving Style: {}", appetizer.serving_style());
        println!("Vegetarian: {}", yes_no(appetizer.is_vegetarian()));
        println!();
    }
    for main in menu.main_courses() {
        print!("{}", main);
        println!("Cooking Method: {}", main.cooking_method());
        println!("Protein Type: {}", main.protein_type());
        let sides = main
            .side_dishes()
            .iter()
            .map(|side| format!("{} ({})", side.name, side.category))
            .collect::<Vec<_>>()
            .join(", ");
        println!("Side Dishes: {}", sides);
        println!("Gluten-Free: {}", yes_no(main.is_gluten_free()));
        println!();
    }
    for dessert in menu.desserts() {
        print!("{}", dessert);
        println!("Flavor Profile: {}", dessert.flavor_profile());
        println!("Sweetness Level: {}", dessert.sweetness_level());
        println!("Contains Nuts: {}", yes_no(dessert.contains_nuts()));
        println!();
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

fn sample_menu() -> Menu {
    let mut menu = Menu::new();

    let mut appetizer = Appetizer::default();
    appetizer.dish_mut().set_name("Samosa Platter");
    appetizer.set_spiciness_level(7);
    appetizer.set_serving_style(ServingStyle::FamilyStyle);
    appetizer.set_vegetarian(true);
    menu.add_appetizer(appetizer);

    menu.add_main_course(MainCourse::new(
        "Grilled Chicken",
        vec![
            "Chicken".to_string(),
            "Olive Oil".to_string(),
            "Garlic".to_string(),
            "Rosemary".to_string(),
        ],
        30,
        18.99,
        CuisineType::American,
        CookingMethod::Grilled,
        "Chicken",
        vec![
            SideDish::new("Mashed Potatoes", SideCategory::Starches),
            SideDish::new("Green Beans", SideCategory::Vegetable),
        ],
        true,
    ));

    menu.add_dessert(Dessert::new(
        "Chocolate Cake",
        vec![
            "Flour".to_string(),
            "Sugar".to_string(),
            "Cocoa Powder".to_string(),
            "Eggs".to_string(),
        ],
        45,
        7.99,
        CuisineType::French,
        FlavorProfile::Sweet,
        9,
        false,
    ));

    menu
}
