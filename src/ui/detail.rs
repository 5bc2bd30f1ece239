use iced::widget::image::Handle;
use iced::widget::{button, column, container, pick_list, scrollable, text, Column, Image};
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;

use super::{ThumbnailSlot, Thumbnails};
use crate::config::Config;
use crate::format::{address_lines, customer_name, format_date, format_money};
use crate::media::thumbnail::THUMBNAIL_HEIGHT;
use crate::state::data::{Order, OrderStatus};
use crate::state::edit::{DraftItem, EditSession};
use crate::Message;

const CARD_WIDTH: f32 = 220.0;

/// Order summary, product cards and the save button
pub fn view<'a>(
    session: &'a EditSession,
    config: &'a Config,
    thumbnails: &'a Thumbnails,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = session
        .draft()
        .iter()
        .enumerate()
        .map(|(index, item)| product_card(index, item, config, thumbnails))
        .collect();

    let save_label = if session.is_saving() {
        "Saving..."
    } else if session.is_modified() {
        "Save Changes *"
    } else {
        "Save Changes"
    };

    let content: Column<Message> = column![
        button("Back").on_press(Message::Back).style(button::secondary),
        text("Order Details").size(24),
        summary_card(session.order(), config),
        text("Products").size(20),
        Wrap::with_elements(cards).spacing(12.0).line_spacing(12.0),
        button(save_label)
            .on_press_maybe(session.can_save().then_some(Message::Save))
            .style(button::success)
            .padding(10),
    ]
    .spacing(16);

    container(scrollable(content))
        .padding(24)
        .width(Length::Fill)
        .into()
}

fn summary_card<'a>(order: &'a Order, config: &'a Config) -> Element<'a, Message> {
    let date = format_date(&order.created_at).unwrap_or_default();

    let mut card: Column<Message> = column![
        text(customer_name(order.address.as_ref())).size(18),
        text(format!(
            "Total: {}",
            format_money(&config.currency_symbol, order.amount)
        )),
        text(format!("Payment: {}", order.payment_mode)),
        text(format!("Date: {date}")),
        text("Address:"),
    ]
    .spacing(4);

    card = match &order.address {
        Some(address) => {
            let (street, locality) = address_lines(address);
            card.push(text(street)).push(text(locality))
        }
        None => card.push(text("No address available")),
    };

    container(card)
        .padding(16)
        .max_width(500.0)
        .style(container::rounded_box)
        .into()
}

fn product_card<'a>(
    index: usize,
    item: &'a DraftItem,
    config: &'a Config,
    thumbnails: &'a Thumbnails,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match thumbnails.get(&item.image) {
        Some(ThumbnailSlot::Ready(handle)) => Image::<Handle>::new(handle.clone())
            .height(Length::Fixed(THUMBNAIL_HEIGHT as f32))
            .content_fit(ContentFit::Contain)
            .into(),
        Some(ThumbnailSlot::Loading) => placeholder("Loading image..."),
        _ => placeholder(&item.name),
    };

    let card = column![
        picture,
        text(item.name.as_str()).size(16),
        text(format!(
            "{} | Qty: {}",
            format_money(&config.currency_symbol, item.price),
            item.quantity
        ))
        .size(14),
        text("Status").size(14),
        pick_list(OrderStatus::ALL, Some(item.status), move |status: OrderStatus| {
            Message::StatusChanged(index, status)
        })
        .width(Length::Fill),
    ]
    .spacing(6);

    container(card)
        .padding(10)
        .width(Length::Fixed(CARD_WIDTH))
        .style(container::rounded_box)
        .into()
}

fn placeholder(label: &str) -> Element<'_, Message> {
    container(text(label).size(14))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(THUMBNAIL_HEIGHT as f32))
        .into()
}
