use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use storefront::{
    ClientConfig, InventoryStore, NewProduct, ProductStore, SortSpec, StockMovement, Storefront,
};

#[derive(Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Browse and administer the product catalog from the terminal")]
struct Cli {
    /// Serve everything from the in-memory demo data instead of the API.
    #[arg(long)]
    mock: bool,

    /// Base URL of the API gateway, e.g. http://localhost:8080
    #[arg(long)]
    base_url: Option<String>,

    /// API key sent with every request.
    #[arg(long)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List one page of products.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
    },
    /// Show one product with its inventory detail.
    Show { id: String },
    /// Purchase units of a product.
    Buy {
        id: String,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Create a product.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        price: f64,
    },
}

fn build_client(cli: &Cli) -> Result<Storefront> {
    if cli.mock {
        return Ok(Storefront::mock());
    }

    let config = match (&cli.base_url, &cli.api_key) {
        (Some(base_url), Some(api_key)) => ClientConfig::new(base_url, api_key),
        _ => ClientConfig::from_env()
            .context("pass --base-url/--api-key or set STOREFRONT_BASE_URL/STOREFRONT_API_KEY")?,
    };

    Ok(Storefront::connect(config)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let shop = build_client(&cli)?;

    match &cli.command {
        Command::List { page, size } => {
            let result = shop
                .products()
                .list(*page, *size, &SortSpec::default())
                .await?;

            println!(
                "página {}: {} de {} productos",
                result.page,
                result.items.len(),
                result.total_items
            );
            for product in &result.items {
                println!("{:>4}  {:<32} {:>12.2}", product.id, product.name, product.price);
            }
        }
        Command::Show { id } => {
            let product = shop.products().get(id).await?;
            println!("{} - {}", product.name, product.description);
            println!("precio: {:.2}", product.price);

            match shop.inventory().get(id).await {
                Ok(detail) => println!(
                    "stock: {} unidades @ {:.2}",
                    detail.available_quantity, detail.unit_price
                ),
                Err(err) => println!("stock: no disponible ({err})"),
            }
        }
        Command::Buy { id, quantity } => {
            let detail = shop.inventory().get(id).await?;
            let movement = StockMovement {
                quantity: *quantity,
                unit_price: detail.unit_price,
            };

            let stock = shop.inventory().apply_purchase(id, movement).await?;
            println!(
                "producto {}: stock actualizado a {}",
                stock.producto_id, stock.new_quantity
            );
        }
        Command::Create {
            name,
            description,
            price,
        } => {
            let product = shop
                .products()
                .create(NewProduct {
                    name: name.clone(),
                    description: description.clone(),
                    price: *price,
                    available: true,
                })
                .await?;

            println!("creado producto {} ({})", product.id, product.name);
        }
    }

    Ok(())
}
