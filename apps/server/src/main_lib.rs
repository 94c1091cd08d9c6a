use std::sync::Arc;

use crate::config::Config;
use crate::error::ApiError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use trellis_core::fx::{ConversionService, ConversionServiceTrait};
use trellis_core::movies::{MovieService, MovieServiceTrait};
use trellis_core::travel::{TravelService, TravelServiceTrait};
use trellis_market_data::{RateFetcher, YahooProvider};
use trellis_search::{bootstrap, ElasticClient, ElasticConfig, MovieIndex};
use trellis_storage_postgres::{create_pool, run_migrations, DbExecutor, TravelRepository};

/// Shared handler state. Movie search and the travel blog are optional and
/// their routes answer 501 when the backing store is not configured.
pub struct AppState {
    pub conversion_service: Arc<dyn ConversionServiceTrait + Send + Sync>,
    pub movie_service: Option<Arc<dyn MovieServiceTrait + Send + Sync>>,
    pub travel_service: Option<Arc<dyn TravelServiceTrait + Send + Sync>>,
}

impl AppState {
    pub fn movies(&self) -> Result<&Arc<dyn MovieServiceTrait + Send + Sync>, ApiError> {
        self.movie_service.as_ref().ok_or_else(|| {
            ApiError::NotImplemented("movie search is not configured".to_string())
        })
    }

    pub fn travel(&self) -> Result<&Arc<dyn TravelServiceTrait + Send + Sync>, ApiError> {
        self.travel_service.as_ref().ok_or_else(|| {
            ApiError::NotImplemented("travel blog is not configured".to_string())
        })
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("TRELLIS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let fetcher: Arc<dyn RateFetcher> =
        Arc::new(YahooProvider::with_chart_url(config.yahoo_chart_url.clone())?);
    let conversion_service = Arc::new(ConversionService::new(fetcher));

    let movie_service: Option<Arc<dyn MovieServiceTrait + Send + Sync>> = match &config.elastic {
        Some(settings) => {
            let client = ElasticClient::new(
                ElasticConfig::new(settings.address.clone())
                    .with_basic_auth(settings.username.clone(), settings.password.clone()),
            )?;
            let index = MovieIndex::new(client);
            bootstrap(&index).await?;
            tracing::info!("Movie search enabled at {}", settings.address);
            Some(Arc::new(MovieService::new(Arc::new(index))))
        }
        None => {
            tracing::warn!("ELASTICSEARCH_ADDRESS not set; movie routes are disabled");
            None
        }
    };

    let travel_service: Option<Arc<dyn TravelServiceTrait + Send + Sync>> =
        match &config.database_url {
            Some(url) => {
                let pool = create_pool(url)?;
                run_migrations(&pool)?;
                let repository = TravelRepository::new(DbExecutor::new(pool));
                tracing::info!("Travel blog database ready");
                Some(Arc::new(TravelService::new(Arc::new(repository))))
            }
            None => {
                tracing::warn!("DATABASE_URL not set; travel routes are disabled");
                None
            }
        };

    Ok(Arc::new(AppState {
        conversion_service,
        movie_service,
        travel_service,
    }))
}
