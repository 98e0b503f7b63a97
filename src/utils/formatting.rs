use console::style;
use tabled::{Table, Tabled, settings::{Style, Alignment}};

use crate::models::{order::OrderSummary, product::Product, MAX_RATING};
use crate::services::cart::Cart;

#[derive(Tabled)]
struct ProductTableRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Two decimals, symbol first. Float residue around zero renders as zero.
pub fn format_price(amount: f64, symbol: &str) -> String {
    let amount = if amount.abs() < 0.005 { 0.0 } else { amount };
    format!("{}{:.2}", symbol, amount)
}

pub fn format_rating(rating: f64, review_count: u32) -> String {
    if review_count == 0 {
        return "No reviews yet".to_string();
    }

    let filled = rating.round().clamp(0.0, MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    let noun = if review_count == 1 { "review" } else { "reviews" };
    format!(
        "{}{} {:.1} ({} {})",
        "★".repeat(filled),
        "☆".repeat(empty),
        rating,
        review_count,
        noun
    )
}

pub fn format_product_table(products: &[&Product], symbol: &str) -> String {
    if products.is_empty() {
        return String::new();
    }

    let rows: Vec<ProductTableRow> = products
        .iter()
        .enumerate()
        .map(|(i, product)| ProductTableRow {
            index: i + 1,
            name: product.name.clone(),
            price: format_price(product.price, symbol),
            rating: format_rating(product.rating, product.review_count),
            description: if product.description.chars().count() > 40 {
                format!("{}...", product.description.chars().take(37).collect::<String>())
            } else {
                product.description.clone()
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left());

    table.to_string()
}

pub fn format_product_detail(product: &Product, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", style("Name").bold(), style(&product.name).green()));
    output.push_str(&format!(
        "{}: {}\n",
        style("Price").bold(),
        style(format_price(product.price, symbol)).yellow()
    ));
    output.push_str(&format!(
        "{}: {}\n",
        style("Description").bold(),
        style(&product.description).dim()
    ));
    output.push_str(&format!(
        "{}: {}\n",
        style("Rating").bold(),
        format_rating(product.rating, product.review_count)
    ));

    if let Some(image_path) = &product.image_path {
        output.push_str(&format!("{}: {}\n", style("Image").bold(), style(image_path).dim()));
    }

    output
}

pub fn format_cart(cart: &Cart, symbol: &str) -> String {
    if cart.is_empty() {
        return format!("{}\n", style("Your cart is empty").dim());
    }

    let mut output = String::new();
    for (i, item) in cart.items().iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. {} {}\n",
            i + 1,
            item.name,
            style(format_price(item.price, symbol)).yellow()
        ));
    }
    output.push_str(&format!(
        "\n{} {}\n",
        style("Total:").bold(),
        style(format_price(cart.total(), symbol)).green().bold()
    ));

    output
}

pub fn format_order_confirmation(summary: &OrderSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n\n", style("Thank you for your purchase!").bold().green()));
    output.push_str(&format!("{}: {}\n", style("Order").bold(), style(summary.id).cyan()));
    output.push_str(&format!("{}\n", style("Order Summary:").bold()));

    for (product, quantity) in summary.line_items() {
        let line_total = product.price * quantity as f64;
        if quantity > 1 {
            output.push_str(&format!(
                "- {} x{}: {}\n",
                product.name,
                quantity,
                format_price(line_total, symbol)
            ));
        } else {
            output.push_str(&format!("- {}: {}\n", product.name, format_price(line_total, symbol)));
        }
    }

    output.push_str(&format!(
        "\n{} {}\n",
        style("Total Amount:").bold(),
        style(format_price(summary.total, symbol)).green().bold()
    ));

    output
}
