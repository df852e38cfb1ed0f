//! Command execution against the storefront API.

use std::io::Write;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};
use wristo_application::api::BlogListQuery;
use wristo_application::ports::ClientStorage;
use wristo_application::stores::{DeviceSelectionStore, UserStore};
use wristo_application::{ApiClient, ClientPorts};
use wristo_infrastructure::{
    DeferredNavigator, FileClientStorage, MemoryClientStorage, ReqwestTransport, SystemClock, TracingNotifier,
};

use crate::cli::{Cli, Command};
use crate::error::{AppError, AppResult};

/// A connected client plus the stores the commands work through.
pub struct Storefront {
    client: ApiClient,
    navigator: DeferredNavigator,
    users: UserStore,
    devices: DeviceSelectionStore,
}

impl Storefront {
    /// Builds the client from `cli` and restores the saved session. Login
    /// redirects are logged.
    ///
    /// # Errors
    ///
    /// Returns an error if a setting is malformed or the state file
    /// cannot be read.
    pub async fn connect(cli: &Cli) -> AppResult<Self> {
        Self::connect_with(cli, DeferredNavigator::logging()).await
    }

    /// Like [`Storefront::connect`], with login redirects going to
    /// `navigator`.
    ///
    /// # Errors
    ///
    /// See [`Storefront::connect`].
    pub async fn connect_with(cli: &Cli, navigator: DeferredNavigator) -> AppResult<Self> {
        let settings = cli.settings()?;
        let storage: Arc<dyn ClientStorage> = match &cli.storage {
            _ if cli.ephemeral => Arc::new(MemoryClientStorage::new()),
            Some(path) => Arc::new(FileClientStorage::new(path.clone())),
            None => Arc::new(FileClientStorage::open_default()?),
        };
        let ports = ClientPorts {
            transport: Arc::new(ReqwestTransport::new(settings.clone())?),
            storage: Arc::clone(&storage),
            notifier: Arc::new(TracingNotifier),
            navigator: Arc::new(navigator.clone()),
            clock: Arc::new(SystemClock),
        };
        let client = ApiClient::new(settings, ports)?;

        let users = UserStore::new(client.clone());
        if users.restore().await? {
            debug!("Restored saved session");
        }

        Ok(Self {
            client,
            navigator,
            users,
            devices: DeviceSelectionStore::new(storage),
        })
    }

    /// Runs `command`, then waits for a login redirect it may have
    /// scheduled.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn execute(&self, command: &Command, out: &mut impl Write) -> AppResult<()> {
        let result = self.dispatch(command, out).await;
        self.navigator.settle().await;
        result
    }

    async fn dispatch(&self, command: &Command, out: &mut impl Write) -> AppResult<()> {
        let products = self.client.products();
        match command {
            Command::Hot => print_json(out, &products.hot().await?),
            Command::New => print_json(out, &products.new_products().await?),
            Command::Series { slug: None } => print_json(out, &products.series().await?),
            Command::Series { slug: Some(slug) } => {
                let series = products
                    .series_by_slug(slug)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("series {slug}")))?;
                print_json(out, &series)
            }
            Command::Search {
                keyword,
                page,
                page_size,
            } => print_json(out, &products.search_paged(keyword, *page, *page_size).await?),
            Command::Product { app_id } => {
                let product = products
                    .detail(*app_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("product {app_id}")))?;
                let related = products.related(*app_id).await?;
                print_json(
                    out,
                    &serde_json::json!({ "product": product, "related": related }),
                )
            }
            Command::Bundle { id } => {
                // The pipeline adds the selected device.
                let bundle = self
                    .client
                    .bundles()
                    .by_id(*id, None)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("bundle {id}")))?;
                print_json(out, &bundle)
            }
            Command::Devices => print_json(out, &self.client.devices().list().await?),
            Command::SelectDevice { id } => {
                let devices = self.client.devices().list().await?;
                let device = devices
                    .iter()
                    .find(|d| d.id == *id)
                    .ok_or_else(|| AppError::NotFound(format!("device {id}")))?;
                self.devices.select_device(device).await?;
                info!(device = device.id, "Device selected");
                writeln!(out, "Selected {}", device.display_name)?;
                Ok(())
            }
            Command::ClearDevice => {
                self.devices.clear().await?;
                writeln!(out, "Showing products for all devices")?;
                Ok(())
            }
            Command::Plans => print_json(out, &self.client.subscriptions().active_plans().await?),
            Command::Redeem { code } => match self.client.purchases().redeem_code(code).await? {
                Some(purchase) => print_json(out, &purchase),
                None => Err(AppError::NotFound(format!("purchase for code {code}"))),
            },
            Command::Blog { lang, slug } => {
                let blog = self.client.blog();
                match slug {
                    Some(slug) => {
                        let post = blog
                            .by_slug(slug, lang.as_deref())
                            .await?
                            .ok_or_else(|| AppError::NotFound(format!("post {slug}")))?;
                        print_json(out, &post)
                    }
                    None => {
                        let query = BlogListQuery {
                            lang: lang.clone(),
                            ..BlogListQuery::default()
                        };
                        print_json(out, &blog.list(&query).await?)
                    }
                }
            }
            Command::LoginUrl => {
                let target = &self.client.settings().sso.redirect_uri;
                writeln!(out, "{}", self.client.auth().login_url(target)?)?;
                Ok(())
            }
            Command::Login { code } => {
                match self.client.auth().exchange_code(code).await? {
                    Some(user) => print_json(out, &user)?,
                    None => writeln!(out, "Signed in")?,
                }
                Ok(())
            }
            Command::Whoami => {
                if !self.users.is_logged_in().await {
                    return Err(AppError::NotSignedIn);
                }
                let user = match self.users.refresh().await? {
                    Some(user) => Some(user),
                    None => self.users.user_info().await,
                };
                match user {
                    Some(user) => print_json(out, &user),
                    None => Err(AppError::NotFound("user profile".to_string())),
                }
            }
            Command::Logout => {
                self.users.logout().await?;
                writeln!(out, "Signed out")?;
                Ok(())
            }
        }
    }
}

fn print_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
