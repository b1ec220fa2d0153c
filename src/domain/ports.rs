use crate::utils::error::Result;
use async_trait::async_trait;
use scraper::{ElementRef, Html};

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_root(&self) -> &str;
    fn results_dir(&self) -> &str;
    fn combined_file(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn delay_ms(&self) -> u64;
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET the page body. Any transport error or non-2xx status is an `Err`.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Finds the results table inside a parsed detail page.
pub trait TableLocator: Send + Sync {
    fn locate<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>>;
}
