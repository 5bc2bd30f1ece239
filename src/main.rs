use iced::widget::image::Handle;
use iced::{Element, Task, Theme};

mod api;
mod config;
mod error;
mod format;
mod media;
mod state;
mod ui;

use api::OrdersClient;
use config::Config;
use error::{ApiError, ThumbnailError};
use media::thumbnail::{self, Thumbnail};
use state::data::{Order, OrderStatus};
use state::edit::SaveRequest;
use state::orders::Applied;
use state::pagination::PageNav;
use state::screen::OrdersScreen;
use state::ticket::Ticket;
use ui::{ThumbnailSlot, Thumbnails};

/// Main application state
struct OrdersAdmin {
    config: Config,
    /// The store client, or why it could not be built
    client: Result<OrdersClient, ApiError>,
    /// List view, edit session and their transitions
    screen: OrdersScreen,
    /// Product pictures, shared across edit sessions
    thumbnails: Thumbnails,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Operator asked to reload the screen
    Reload,
    /// The list fetch issued under this ticket finished
    OrdersLoaded(Ticket, Result<Vec<Order>, ApiError>),
    Navigate(PageNav),
    /// Edit the order at this index of the collection
    Select(usize),
    Back,
    StatusChanged(usize, OrderStatus),
    Save,
    /// The store answered a save request
    Saved(SaveRequest, Result<Order, ApiError>),
    ThumbnailLoaded(String, Result<Thumbnail, ThumbnailError>),
}

impl OrdersAdmin {
    /// Create the screen and kick off the initial load
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        let client = OrdersClient::new(&config.api_base_url);
        if let Err(err) = &client {
            tracing::error!(error = %err, "Could not create order store client");
        }

        tracing::info!(
            base_url = %config.api_base_url,
            page_size = config.page_size,
            "Orders admin initialized"
        );

        let mut app = OrdersAdmin {
            screen: OrdersScreen::new(config.page_size),
            config,
            client,
            thumbnails: Thumbnails::new(),
        };
        // Initial load
        let task = app.load();

        (app, task)
    }

    /// (Re)mount the screen and fetch the whole collection once
    fn load(&mut self) -> Task<Message> {
        let ticket = self.screen.mount();
        // Pictures that failed last time get another try
        ui::forget_failed(&mut self.thumbnails);

        // Fetch in background; completion is matched against the ticket
        match self.client.clone() {
            Ok(client) => Task::perform(
                async move { client.fetch_orders().await },
                move |result| Message::OrdersLoaded(ticket, result),
            ),
            Err(err) => Task::done(Message::OrdersLoaded(ticket, Err(err))),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Reload => {
                tracing::info!("Reloading orders");
                self.load()
            }
            Message::OrdersLoaded(ticket, result) => {
                // Stale tickets are dropped by the book
                match self.screen.finish_load(ticket, result) {
                    Ok(Applied::Yes) => {
                        tracing::info!(count = self.screen.book().len(), "Orders loaded");
                    }
                    Ok(Applied::Stale) => {
                        tracing::debug!("Discarding response of a superseded load");
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "Error fetching orders");
                    }
                }
                Task::none()
            }
            Message::Navigate(nav) => {
                self.screen.navigate(nav);
                Task::none()
            }
            Message::Select(index) => {
                let Some(session) = self.screen.select(index) else {
                    tracing::warn!(index, "Selected order is no longer in the list");
                    return Task::none();
                };
                tracing::debug!(order_id = %session.order().id, items = session.draft().len(), "Editing order");

                let urls: Vec<String> = session.draft().iter().map(|item| item.image.clone()).collect();
                self.fetch_thumbnails(urls)
            }
            Message::Back => {
                self.screen.back();
                Task::none()
            }
            Message::StatusChanged(index, status) => {
                if !self.screen.set_status(index, status) {
                    tracing::warn!(index, "Status change for an item that is not in the draft");
                }
                Task::none()
            }
            Message::Save => {
                let Some(request) = self.screen.begin_save() else {
                    tracing::debug!("Nothing to save");
                    return Task::none();
                };
                tracing::info!(order_id = %request.order_id, status = %request.status, "Saving order status");

                // Send the PUT in background
                match self.client.clone() {
                    Ok(client) => {
                        let order_id = request.order_id.clone();
                        let status = request.status;
                        Task::perform(
                            async move { client.update_order_status(&order_id, status).await },
                            move |result| Message::Saved(request.clone(), result),
                        )
                    }
                    Err(err) => Task::done(Message::Saved(request, Err(err))),
                }
            }
            Message::Saved(request, result) => {
                // Reconcile the list, then close or keep the session
                match self.screen.finish_save(&request, result) {
                    Ok(Applied::Yes) => {
                        tracing::info!(order_id = %request.order_id, "Order status updated successfully");
                    }
                    Ok(Applied::Stale) => {
                        tracing::info!(
                            order_id = %request.order_id,
                            "Order updated after its edit session was closed"
                        );
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "Error updating order");
                    }
                }
                Task::none()
            }
            Message::ThumbnailLoaded(url, result) => {
                let slot = match result {
                    Ok(thumb) => {
                        ThumbnailSlot::Ready(Handle::from_rgba(thumb.width, thumb.height, thumb.rgba))
                    }
                    Err(err) => {
                        tracing::warn!(url = %url, error = %err, "Could not load product image");
                        ThumbnailSlot::Failed
                    }
                };
                self.thumbnails.insert(url, slot);
                Task::none()
            }
        }
    }

    /// Start downloads for pictures not fetched yet
    fn fetch_thumbnails(&mut self, urls: Vec<String>) -> Task<Message> {
        if !self.config.load_thumbnails {
            return Task::none();
        }
        let Ok(client) = &self.client else {
            return Task::none();
        };

        let mut tasks = Vec::new();
        for url in urls {
            if url.is_empty() || self.thumbnails.contains_key(&url) {
                continue;
            }
            self.thumbnails.insert(url.clone(), ThumbnailSlot::Loading);

            let client = client.clone();
            let key = url.clone();
            tasks.push(Task::perform(
                thumbnail::load_thumbnail(client, url),
                move |result| Message::ThumbnailLoaded(key.clone(), result),
            ));
        }

        Task::batch(tasks)
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        match self.screen.session() {
            Some(session) => ui::detail::view(session, &self.config, &self.thumbnails),
            None => ui::list::view(&self.screen, &self.config),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Install the global tracing subscriber; `RUST_LOG` overrides the default level
fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .compact()
        .init();
}

fn main() -> iced::Result {
    setup_tracing();

    iced::application("Orders Management", OrdersAdmin::update, OrdersAdmin::view)
        .theme(OrdersAdmin::theme)
        .centered()
        .run_with(OrdersAdmin::new)
}
