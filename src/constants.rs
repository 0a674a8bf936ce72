/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("kma-sfctm/", env!("CARGO_PKG_VERSION"));

/// KMA API Hub hourly surface observation endpoint, with its sample query
pub const KMA_SFCTM_URL: &str = "https://apihub.kma.go.kr/api/typ01/url/kma_sfctm3.php?tm1=201512110100&tm2=201512140000&stn=108&help=1&authKey=xwx2vQPjQMqMdr0D40DKHg";

pub const DEFAULT_TM1: &str = "20250501";
pub const DEFAULT_TM2: &str = "20250510";
pub const DEFAULT_STN: &str = "104";
pub const DEFAULT_HELP: bool = true;
pub const DEFAULT_AUTH_KEY: &str = "xwx2vQPjQMqMdr0D40DKHg";

// Environment overrides
pub const ENV_BASE_URL: &str = "KMA_BASE_URL";
pub const ENV_TM1: &str = "KMA_TM1";
pub const ENV_TM2: &str = "KMA_TM2";
pub const ENV_STN: &str = "KMA_STN";
pub const ENV_HELP: &str = "KMA_HELP";
pub const ENV_AUTH_KEY: &str = "KMA_AUTH_KEY";
pub const ENV_URL_STYLE: &str = "KMA_URL_STYLE";
