use athletics_client::{AthleticsClient, config::Config, http_client::ReqwestAthleticsClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Reads ATHLETICS_API_URL (defaults to http://localhost:8081)
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(());
        }
    };
    let client = ReqwestAthleticsClient::from_config(&cfg)?;
    for p in client.list_participants().await? {
        let group = p
            .age_group()
            .map(|g| g.band().label())
            .unwrap_or_else(|| "-".into());
        println!("{:<24} {:<7} {:>5}  {}", p.full_name(), p.gender, group, p.club);
    }
    Ok(())
}
