use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "A server-rendered contact book")]
pub struct Config {
    #[arg(long, env = "HTTP_ADDRESS", default_value = "127.0.0.1")]
    pub http_address: String,

    #[arg(long, env = "HTTP_PORT", default_value_t = 3000)]
    pub http_port: u16,

    #[arg(long, env = "SURREAL_DB_CONNECTION", default_value = "ws://localhost:8000")]
    pub surreal_db_connection: String,

    #[arg(long, env = "SURREAL_DB_NAMESPACE", default_value = "contact_book")]
    pub surreal_db_namespace: String,

    #[arg(long, env = "SURREAL_DB_DATABASE", default_value = "contact_book")]
    pub surreal_db_database: String,

    #[arg(long, env = "STATIC_FILES_FOLDER", default_value = "public")]
    pub static_files_folder: String,
}

impl Config {
    pub fn http_listen_url(&self) -> String {
        format!("http://{}:{}", self.http_address, self.http_port)
    }
}
