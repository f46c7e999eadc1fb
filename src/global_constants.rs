#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "Felagi - Amharic Search";
pub const APPLICATION_TITLE: &str = "Felagi";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_SEARCH: &str = "[SEARCH]";
pub const LOG_TAG_HTTP: &str = "[HTTP]";
pub const LOG_TAG_INDEX: &str = "[INDEX]";
pub const LOG_TAG_SERVER: &str = "[SERVER]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";

pub const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:8000";
pub const DEFAULT_SERVE_BIND: &str = "127.0.0.1:8000";
pub const ENV_BACKEND_ORIGIN: &str = "FELAGI_BACKEND";

pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const SETTINGS_DIR_NAME: &str = "felagi";

pub const DESCRIPTION_PREVIEW_CHARS: usize = 250;
pub const DESCRIPTION_ELLIPSIS: &str = "...";
pub const TERMS_PREVIEW_COUNT: usize = 5;

pub const LABEL_EXPAND_TERMS: &str = "ተጨማሪ";
pub const LABEL_COLLAPSE_TERMS: &str = "ያጠቃልሉ";
pub const LABEL_RESULTS_HEADER: &str = "የፍለጋ ውጤቶች";
pub const LABEL_ALL_RESULTS: &str = "ሁሉም ውጤቶች";
pub const LABEL_RESULTS_FOUND: &str = "ውጤቶች ተገኝተዋል";
pub const LABEL_LOADING: &str = "Loading...";

pub const MESSAGE_FETCH_FAILED: &str = "Failed to fetch results";

pub const DEFAULT_TOP_K: usize = 10;
pub const LUHN_UPPER_PERCENT: f64 = 0.05;
pub const LUHN_LOWER_DF_CUTOFF: usize = 3;

pub const PROMPT: &str = "ፈላጊ> ";

pub const STARTUP_BANNER: &str = r#"
╔════════════════════════════════════════════════════════╗
║  Felagi (ፈላጊ) - Amharic Search                         ║
║                                                        ║
║  Type a query and press Enter to search.               ║
║  Commands:  open <n>   open result n in the browser    ║
║             more <n>   expand/collapse index terms     ║
║             quit       exit                            ║
╚════════════════════════════════════════════════════════╝
"#;
