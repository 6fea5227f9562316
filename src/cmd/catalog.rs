//! Catalog command implementation
//!
//! Handles `velura catalog <listing>`, which prints one part of the
//! catalog: care steps, products, ingredients or quiz questions.

use anyhow::Result;
use console::style;
use std::path::Path;

use super::{print_json, Site};
use crate::catalog::{Catalog, ProductFilter};
use crate::error::VeluraError;
use crate::fmt::{
    catalog_icon, format_price, format_rating, icon, time_icon, INFO, LEAF, STAR, WARNING,
};

/// Listings accepted by `velura catalog`
pub const LISTINGS: [&str; 4] = ["steps", "products", "ingredients", "questions"];

/// Print one catalog listing
///
/// `category` narrows `steps` and `products`; it is ignored for the other
/// listings.
///
/// # Examples
///
/// ```no_run
/// use velura::cmd::catalog::cmd_catalog;
///
/// // All serums, as JSON
/// cmd_catalog("products", Some("Serum"), true, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_catalog(
    listing: &str,
    category: Option<&str>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    if !LISTINGS.contains(&listing) {
        return Err(VeluraError::InvalidListing {
            name: listing.to_string(),
            valid: LISTINGS.iter().map(|s| s.to_string()).collect(),
        }
        .into());
    }

    let site = Site::load(config_path)?;
    let catalog = &site.catalog;

    if category.is_some() && matches!(listing, "ingredients" | "questions") {
        log::warn!("--category has no effect on the {} listing", listing);
    }

    match listing {
        "steps" => list_steps(catalog, category, json),
        "products" => list_products(catalog, category, json),
        "ingredients" => list_ingredients(catalog, json),
        _ => list_questions(catalog, json),
    }
}

fn list_steps(catalog: &Catalog, category: Option<&str>, json: bool) -> Result<()> {
    let steps = match category {
        Some(category) => catalog.steps_in(category),
        None => catalog.steps().iter().collect(),
    };

    if json {
        return print_json(&steps);
    }

    println!("{} {}", style("Care steps").bold(), style(catalog.version()).dim());
    println!();
    if steps.is_empty() {
        print_no_match(category);
        return Ok(());
    }
    for step in steps {
        println!(
            "  {:>3}  {} {:<16} {:<8} {} {}",
            style(&step.id).cyan(),
            catalog_icon(step.icon.as_deref()),
            style(&step.name).bold(),
            step.category,
            icon(&time_icon(step.time)),
            style(step.time.title()).dim()
        );
        println!("        {}", style(&step.description).dim());
    }
    Ok(())
}

fn list_products(catalog: &Catalog, category: Option<&str>, json: bool) -> Result<()> {
    let filter = match category {
        Some(category) => category
            .parse::<ProductFilter>()
            .map_err(anyhow::Error::msg)?,
        None => ProductFilter::All,
    };
    let products = catalog.products_in(&filter);

    if json {
        return print_json(&products);
    }

    println!(
        "{} {}",
        style("Products").bold(),
        style(format!("({})", filter.label())).dim()
    );
    println!();
    if products.is_empty() {
        print_no_match(category);
        println!(
            "   Categories: {}",
            style(catalog.product_categories().join(", ")).cyan()
        );
        return Ok(());
    }
    for product in products {
        println!(
            "  {:>3}  {:<26} {:<12} {:>5}  {} {}",
            style(&product.id).cyan(),
            style(&product.name).bold(),
            product.category,
            style(format_price(product.price)).green(),
            icon(&STAR),
            format_rating(product.rating, product.reviews)
        );
        println!("        {}", style(&product.description).dim());
        if !product.ingredients.is_empty() {
            println!("        Key ingredients: {}", product.ingredients.join(", "));
        }
        if !product.skin_types.is_empty() {
            println!("        For: {}", product.skin_types.join(", "));
        }
    }
    Ok(())
}

fn list_ingredients(catalog: &Catalog, json: bool) -> Result<()> {
    let ingredients = catalog.ingredients();

    if json {
        return print_json(ingredients);
    }

    println!("{}", style("Ingredient glossary").bold());
    println!();
    for ingredient in ingredients {
        println!(
            "  {} {} {}  {}",
            icon(&LEAF),
            catalog_icon(Some(ingredient.icon.as_str())),
            style(&ingredient.name).bold(),
            style(format!("[{}] {}", ingredient.id, ingredient.scientific_name)).dim()
        );
        println!("      {}", ingredient.description);
        if !ingredient.benefits.is_empty() {
            println!("      Benefits: {}", ingredient.benefits.join(", "));
        }
        if !ingredient.best_for.is_empty() {
            println!("      Best for: {}", ingredient.best_for.join(", "));
        }
        if !ingredient.avoid_with.is_empty() {
            println!(
                "      {} Avoid with: {}",
                icon(&WARNING),
                style(ingredient.avoid_with.join(", ")).yellow()
            );
        }
    }
    Ok(())
}

fn list_questions(catalog: &Catalog, json: bool) -> Result<()> {
    let questions = catalog.questions();

    if json {
        return print_json(questions);
    }

    println!("{}", style("Skin quiz").bold());
    println!();
    for (index, question) in questions.iter().enumerate() {
        println!(
            "  {}. {} {}",
            index + 1,
            style(&question.prompt).bold(),
            style(format!("({})", question.id)).dim()
        );
        for option in &question.options {
            println!(
                "       {} {:<12} {}",
                catalog_icon(option.icon.as_deref()),
                style(&option.value).cyan(),
                option.label
            );
        }
    }
    Ok(())
}

fn print_no_match(category: Option<&str>) {
    println!(
        "{} Nothing in category {}",
        icon(&INFO),
        style(category.unwrap_or("All")).yellow()
    );
}
