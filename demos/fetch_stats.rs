use cp_stats_scraper::StatsClient;

#[tokio::main]
async fn main() {
    let mut args = std::env::args().skip(1);
    let platform = args.next().unwrap_or_else(|| "leetcode".to_string());
    let username = args.next().unwrap_or_else(|| "lee215".to_string());

    let client = StatsClient::new();
    let result = match platform.as_str() {
        "leetcode" => client
            .get_leetcode_stats(&username)
            .await
            .map(|s| serde_json::to_string_pretty(&s).unwrap()),
        "gfg" => client
            .get_gfg_stats(&username)
            .await
            .map(|s| serde_json::to_string_pretty(&s).unwrap()),
        "hackerrank" => client
            .get_hackerrank_stats(&username)
            .await
            .map(|s| serde_json::to_string_pretty(&s).unwrap()),
        "codechef" => client
            .get_codechef_stats(&username)
            .await
            .map(|s| serde_json::to_string_pretty(&s).unwrap()),
        "codeforces" => client
            .get_codeforces_stats(&username)
            .await
            .map(|s| serde_json::to_string_pretty(&s).unwrap()),
        other => {
            eprintln!("unknown platform {other:?}; use leetcode|gfg|hackerrank|codechef|codeforces");
            std::process::exit(2);
        }
    };

    match result {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error ({}): {e}", e.status_code());
            std::process::exit(1);
        }
    }
}
