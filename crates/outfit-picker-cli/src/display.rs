use colored::Colorize;
use outfit_picker_core::{Category, Wardrobe};

/// Print every category with its items, empty categories included
pub fn print_wardrobe(title: &str, wardrobe: &Wardrobe) {
    println!();
    println!("{} ({} items)", title.bold(), wardrobe.len());
    for category in Category::ALL {
        print_category(category, wardrobe);
    }
}

/// Print only the categories an outfit uses
pub fn print_outfit(outfit: &Wardrobe) {
    println!();
    println!("{}", "Today's Outfit:".green().bold());
    for category in Category::ALL {
        if outfit.count(category) > 0 {
            print_category(category, outfit);
        }
    }
    println!();
}

fn print_category(category: Category, wardrobe: &Wardrobe) {
    println!();
    println!("{}:", category.title().cyan());
    let items = wardrobe.items(category);
    if items.is_empty() {
        println!("       {}", "(none)".dimmed());
    }
    for item in items {
        println!("       {}", item);
    }
}
