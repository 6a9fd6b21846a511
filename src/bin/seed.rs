// Seeds the agents table with sample data so the directory has something
// to show out of the box. Destructive: existing rows are truncated first.
//
//   cargo run --bin seed

use anyhow::Context;

use agent_directory_backend::config::Config;
use agent_directory_backend::db;
use agent_directory_backend::models::NewAgent;

fn sample_agents() -> Vec<NewAgent> {
    [
        (
            "Sarah Johnson",
            "https://i.pravatar.cc/300?img=1",
            "Residential",
            "New York",
            "NY",
            "Experienced residential real estate agent with over 10 years in the NYC market. Specializes in luxury apartments and family homes.",
        ),
        (
            "Michael Chen",
            "https://i.pravatar.cc/300?img=12",
            "Commercial",
            "San Francisco",
            "CA",
            "Commercial real estate expert focusing on office spaces and retail properties in the Bay Area.",
        ),
        (
            "Emily Rodriguez",
            "https://i.pravatar.cc/300?img=5",
            "Luxury",
            "Los Angeles",
            "CA",
            "Luxury property specialist with a portfolio of high-end estates and celebrity homes in Southern California.",
        ),
        (
            "David Thompson",
            "https://i.pravatar.cc/300?img=13",
            "Residential",
            "Chicago",
            "IL",
            "Dedicated to helping first-time homebuyers find their dream homes in Chicago neighborhoods.",
        ),
        (
            "Jennifer Lee",
            "https://i.pravatar.cc/300?img=9",
            "Investment",
            "Miami",
            "FL",
            "Investment property specialist helping clients build wealth through real estate in South Florida.",
        ),
        (
            "Robert Martinez",
            "https://i.pravatar.cc/300?img=14",
            "Commercial",
            "Austin",
            "TX",
            "Commercial real estate broker specializing in tech office spaces and startup-friendly locations.",
        ),
        (
            "Amanda White",
            "https://i.pravatar.cc/300?img=10",
            "Residential",
            "Seattle",
            "WA",
            "Pacific Northwest real estate expert with a passion for eco-friendly and sustainable homes.",
        ),
        (
            "James Wilson",
            "https://i.pravatar.cc/300?img=15",
            "Luxury",
            "New York",
            "NY",
            "Elite luxury real estate agent with exclusive access to Manhattan penthouses and waterfront properties.",
        ),
        (
            "Lisa Anderson",
            "https://i.pravatar.cc/300?img=20",
            "Residential",
            "Boston",
            "MA",
            "Boston real estate professional specializing in historic homes and waterfront properties.",
        ),
        (
            "Christopher Brown",
            "https://i.pravatar.cc/300?img=33",
            "Investment",
            "San Francisco",
            "CA",
            "Real estate investment strategist helping clients maximize ROI in the competitive Bay Area market.",
        ),
        (
            "Michelle Davis",
            "https://i.pravatar.cc/300?img=23",
            "Commercial",
            "Los Angeles",
            "CA",
            "Expert in commercial leasing and sales with a focus on entertainment industry properties.",
        ),
        (
            "Daniel Garcia",
            "https://i.pravatar.cc/300?img=51",
            "Residential",
            "Denver",
            "CO",
            "Mountain living specialist helping clients find homes near ski resorts and outdoor recreation.",
        ),
    ]
    .into_iter()
    .map(
        |(name, photo_url, specialization, city, state, description)| NewAgent {
            name: name.to_string(),
            photo_url: Some(photo_url.to_string()),
            specialization: Some(specialization.to_string()),
            location_city: Some(city.to_string()),
            location_state: Some(state.to_string()),
            description: Some(description.to_string()),
        },
    )
    .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let pool = db::connect(&config)
        .await
        .context("failed to connect to postgres")?;

    tracing::info!("Starting database seed");

    let agents = sample_agents();

    // Truncate and re-insert atomically so a failed seed leaves the old data.
    let mut tx = pool.begin().await?;

    sqlx::query("TRUNCATE TABLE agents RESTART IDENTITY CASCADE")
        .execute(&mut *tx)
        .await?;
    tracing::info!("Cleared existing data");

    for agent in &agents {
        sqlx::query(
            "INSERT INTO agents (name, photo_url, specialization, location_city, location_state, description) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&agent.name)
        .bind(&agent.photo_url)
        .bind(&agent.specialization)
        .bind(&agent.location_city)
        .bind(&agent.location_state)
        .bind(&agent.description)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!("Successfully seeded {} agents", agents.len());
    Ok(())
}
