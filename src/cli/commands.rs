use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{Confirm, Select, theme::ColorfulTheme};

use tracing::{error, info, warn};

use crate::{
    cli::args::Commands,
    models::{category::Category, product::Product},
    seed::{BuiltinSource, JsonFileSource, ProductSource},
    services::{Cart, CartError, Catalog},
    utils::{
        formatting::{
            format_cart, format_order_confirmation, format_price, format_product_detail,
            format_product_table,
        },
        Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static CART: Emoji<'_, '_> = Emoji("🛒 ", "");

const SHOP_MENU: [&str; 5] = [
    "Browse products",
    "View cart",
    "Remove an item",
    "Checkout",
    "Quit",
];

pub struct CliApp {
    config: Config,
    catalog: Catalog,
    cart: Cart,
}

impl CliApp {
    pub fn new(config: Config) -> Result<Self> {
        let source: Box<dyn ProductSource> = match &config.catalog_path {
            Some(path) => Box::new(JsonFileSource::new(path)),
            None => Box::new(BuiltinSource),
        };

        let catalog = Catalog::from_source(source.as_ref())
            .with_context(|| format!("Failed to load catalog from {}", source.describe()))?;

        Ok(Self {
            config,
            catalog,
            cart: Cart::new(),
        })
    }

    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Categories => self.handle_categories(),
            Commands::Products { category, search } => self.handle_products(&category, search),
            Commands::Show { name } => self.handle_show(&name),
            Commands::Shop => self.handle_shop(),
        }
    }

    fn symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    fn handle_categories(&self) -> Result<()> {
        println!("{} {}", INFO, style("Categories").bold().cyan());
        println!("  {} ({})", Category::All, self.catalog.len());
        for (category, count) in self.catalog.category_counts() {
            println!("  {} ({})", category, count);
        }
        Ok(())
    }

    fn handle_products(&self, category: &str, search: Option<String>) -> Result<()> {
        if Category::from_label(category).is_none() {
            println!("{} Unknown category '{}'", WARNING, style(category).yellow());
        }

        let mut products = self.catalog.filter_by_category(category);
        if let Some(term) = search {
            let matches = self.catalog.search(&term);
            products.retain(|product| matches.contains(product));
        }

        if products.is_empty() {
            println!("{} No products found", INFO);
        } else {
            println!("{} {}", INFO, style(format!("Found {} products", products.len())).bold());
            println!("{}", format_product_table(&products, self.symbol()));
        }
        Ok(())
    }

    fn handle_show(&self, name: &str) -> Result<()> {
        match self.catalog.find_by_name(name) {
            Some(product) => {
                println!("{} {}", INFO, style("Product Details").bold().cyan());
                println!("{}", format_product_detail(product, self.symbol()));
            }
            None => {
                println!("{} Product '{}' not found", CROSS, style(name).red());
            }
        }
        Ok(())
    }

    // Interactive session
    fn handle_shop(&mut self) -> Result<()> {
        println!("{} {}", CART, style("Welcome to the store").bold().cyan());
        let theme = ColorfulTheme::default();

        loop {
            let heading = format!(
                "Cart: {} items, {}",
                self.cart.len(),
                format_price(self.cart.total(), self.symbol())
            );
            let choice = Select::with_theme(&theme)
                .with_prompt(heading)
                .items(&SHOP_MENU)
                .default(0)
                .interact()?;

            match choice {
                0 => self.browse(&theme)?,
                1 => self.show_cart(),
                2 => self.remove_item(&theme)?,
                3 => self.checkout(&theme)?,
                _ => break,
            }
        }

        if !self.cart.is_empty() {
            warn!("Session ended with {} items left in the cart", self.cart.len());
        }
        println!("Goodbye!");
        Ok(())
    }

    fn browse(&mut self, theme: &ColorfulTheme) -> Result<()> {
        let labels: Vec<String> = Category::ALL
            .iter()
            .map(|category| {
                let count = self.catalog.filter(*category).len();
                format!("{} ({})", category, count)
            })
            .collect();

        let picked = Select::with_theme(theme)
            .with_prompt("Category")
            .items(&labels)
            .default(0)
            .interact()?;
        let category = Category::ALL[picked];

        let products = self.catalog.filter_by_category(category.label());
        if products.is_empty() {
            println!("{} No products in {}", INFO, category);
            return Ok(());
        }

        println!("{}", format_product_table(&products, self.symbol()));

        let mut names: Vec<String> = products
            .iter()
            .map(|product| format!("{} - {}", product.name, format_price(product.price, self.symbol())))
            .collect();
        names.push("Back".to_string());

        let picked = Select::with_theme(theme)
            .with_prompt("Product")
            .items(&names)
            .default(0)
            .interact()?;
        let Some(product) = products.get(picked).map(|product| (*product).clone()) else {
            return Ok(());
        };

        println!("{}", format_product_detail(&product, self.symbol()));
        let add = Confirm::with_theme(theme)
            .with_prompt("Add to cart?")
            .default(true)
            .interact()?;

        if add {
            let name = product.name.clone();
            self.cart.add(product);
            println!("{} Added {} to your cart", CHECKMARK, style(&name).green());
            info!("Added to cart: {}", name);
        }
        Ok(())
    }

    fn show_cart(&self) {
        println!("{} {}", CART, style("Shopping Cart").bold().cyan());
        println!("{}", format_cart(&self.cart, self.symbol()));
    }

    fn remove_item(&mut self, theme: &ColorfulTheme) -> Result<()> {
        if self.cart.is_empty() {
            println!("{} Your cart is empty!", INFO);
            return Ok(());
        }

        let mut names: Vec<String> = self
            .cart
            .items()
            .iter()
            .map(|item| format!("{} - {}", item.name, format_price(item.price, self.symbol())))
            .collect();
        names.push("Back".to_string());

        let picked = Select::with_theme(theme)
            .with_prompt("Remove which item?")
            .items(&names)
            .default(0)
            .interact()?;
        let Some(product) = self.cart.items().get(picked).cloned() else {
            return Ok(());
        };

        self.remove_from_cart(&product);
        Ok(())
    }

    fn remove_from_cart(&mut self, product: &Product) {
        match self.cart.remove(product) {
            Ok(()) => {
                println!("{} Removed {} from your cart", CHECKMARK, style(&product.name).green());
                info!("Removed from cart: {}", product.name);
            }
            Err(e) => {
                println!("{} Failed to remove item: {}", CROSS, style(&e).red());
                error!("Failed to remove item: {}", e);
            }
        }
    }

    /// Shows the order, asks for confirmation, and only then empties the cart.
    fn checkout(&mut self, theme: &ColorfulTheme) -> Result<()> {
        let summary = match self.cart.checkout_summary() {
            Ok(summary) => summary,
            Err(CartError::EmptyCart) => {
                println!("{} Your cart is empty!", INFO);
                return Ok(());
            }
            Err(e) => {
                println!("{} Checkout failed: {}", CROSS, style(&e).red());
                error!("Checkout failed: {}", e);
                return Ok(());
            }
        };

        self.show_cart();
        let confirmed = Confirm::with_theme(theme)
            .with_prompt(format!(
                "Place order for {}?",
                format_price(summary.total, self.symbol())
            ))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("Checkout cancelled, your cart was kept");
            return Ok(());
        }

        println!("{}", format_order_confirmation(&summary, self.symbol()));
        self.cart.clear();
        info!("Order {} placed, cart cleared", summary.id);
        Ok(())
    }
}
