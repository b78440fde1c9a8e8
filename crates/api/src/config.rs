/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development and for the
/// public widget deployment. Override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// `max-age` advertised on every card response (default: `7200`).
    pub cache_max_age_secs: u64,
    /// Username rendered when the request names none.
    pub default_username: String,
    /// AniList GraphQL endpoint.
    pub anilist_api_url: String,
    /// Timeout for every outbound request (GraphQL and posters).
    pub http_client_timeout_secs: u64,
    /// `User-Agent` sent with poster requests.
    pub poster_user_agent: String,
    /// Drop list entries that carry no cover image URL.
    pub require_poster: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                       |
    /// |----------------------------|-------------------------------|
    /// | `HOST`                     | `0.0.0.0`                     |
    /// | `PORT`                     | `3000`                        |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                          |
    /// | `CACHE_MAX_AGE_SECS`       | `7200`                        |
    /// | `DEFAULT_USERNAME`         | `kenndeclouv`                 |
    /// | `ANILIST_API_URL`          | `https://graphql.anilist.co`  |
    /// | `HTTP_CLIENT_TIMEOUT_SECS` | `10`                          |
    /// | `POSTER_USER_AGENT`        | `animecard-widget/0.1`        |
    /// | `REQUIRE_POSTER`           | `false`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let cache_max_age_secs: u64 = std::env::var("CACHE_MAX_AGE_SECS")
            .unwrap_or_else(|_| "7200".into())
            .parse()
            .expect("CACHE_MAX_AGE_SECS must be a valid u64");

        let default_username =
            std::env::var("DEFAULT_USERNAME").unwrap_or_else(|_| "kenndeclouv".into());

        let anilist_api_url = std::env::var("ANILIST_API_URL")
            .unwrap_or_else(|_| animecard_anilist::client::DEFAULT_API_URL.into());

        let http_client_timeout_secs: u64 = std::env::var("HTTP_CLIENT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("HTTP_CLIENT_TIMEOUT_SECS must be a valid u64");

        let poster_user_agent = std::env::var("POSTER_USER_AGENT")
            .unwrap_or_else(|_| animecard_anilist::images::DEFAULT_USER_AGENT.into());

        let require_poster: bool = std::env::var("REQUIRE_POSTER")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("REQUIRE_POSTER must be `true` or `false`");

        Self {
            host,
            port,
            request_timeout_secs,
            cache_max_age_secs,
            default_username,
            anilist_api_url,
            http_client_timeout_secs,
            poster_user_agent,
            require_poster,
        }
    }

    /// `Cache-Control` value attached to card responses.
    pub fn cache_control(&self) -> String {
        format!(
            "public, max-age={}, must-revalidate",
            self.cache_max_age_secs
        )
    }
}
