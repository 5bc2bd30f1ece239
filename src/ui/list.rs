use iced::widget::{button, column, container, horizontal_space, row, text, Column, Row};
use iced::{Alignment, Color, Element, Length, Theme};

use crate::config::Config;
use crate::format::{customer_name, format_date, format_money};
use crate::state::orders::LoadState;
use crate::state::pagination::{PageNav, PageWindow};
use crate::state::screen::OrdersScreen;
use crate::Message;

const COLUMNS: [(&str, u16); 6] = [
    ("Sl.No", 1),
    ("Customer", 3),
    ("Amount", 2),
    ("Payment", 2),
    ("Date", 2),
    ("Actions", 1),
];

/// The orders table with its pagination bar
pub fn view<'a>(screen: &'a OrdersScreen, config: &'a Config) -> Element<'a, Message> {
    let book = screen.book();
    let window = book.window();

    let header = row![
        text("Orders Management").size(28),
        horizontal_space(),
        button("Reload").on_press(Message::Reload).style(button::secondary),
    ]
    .align_y(Alignment::Center);

    let mut content: Column<Message> = column![header].spacing(16);

    if let Some(notice) = screen.notice() {
        content = content.push(text(notice).color(Color::from_rgb(0.1, 0.55, 0.25)));
    }

    let titles = COLUMNS
        .iter()
        .map(|(title, portion)| cell(text(*title).size(14).into(), *portion));
    content = content.push(Row::with_children(titles).spacing(8));

    for (serial, (index, order)) in (window.first_serial()..).zip(book.visible()) {
        let customer = customer_name(order.address.as_ref());
        let date = format_date(&order.created_at).unwrap_or_default();

        let cells: [Element<'a, Message>; 6] = [
            text(serial.to_string()).into(),
            text(customer).into(),
            text(format_money(&config.currency_symbol, order.amount)).into(),
            text(order.payment_mode.as_str()).into(),
            text(date).into(),
            button("Edit")
                .on_press(Message::Select(index))
                .style(button::secondary)
                .into(),
        ];
        let row = Row::with_children(
            cells
                .into_iter()
                .zip(COLUMNS)
                .map(|(content, (_, portion))| cell(content, portion)),
        )
        .spacing(8)
        .align_y(Alignment::Center);

        content = content.push(row);
    }

    match book.load_state() {
        LoadState::Loading => content = content.push(text("Loading orders...")),
        LoadState::Loaded if book.is_empty() => content = content.push(text("No orders yet.")),
        _ => {}
    }

    content = content.push(pagination_bar(&window));

    container(content)
        .padding(24)
        .width(Length::Fill)
        .into()
}

fn cell(content: Element<'_, Message>, portion: u16) -> Element<'_, Message> {
    container(content)
        .center_x(Length::FillPortion(portion))
        .into()
}

/// First / Prev / 1..N / Next / Last
fn pagination_bar<'a>(window: &PageWindow) -> Element<'a, Message> {
    let nav = |label: &'a str, target: PageNav, enabled: bool| {
        button(label)
            .on_press_maybe(enabled.then_some(Message::Navigate(target)))
            .style(button::secondary)
    };

    let mut bar = Row::new().spacing(4);
    bar = bar
        .push(nav("«", PageNav::First, window.has_previous()))
        .push(nav("‹", PageNav::Previous, window.has_previous()));

    for page in 1..=window.total_pages {
        let style: fn(&Theme, button::Status) -> button::Style = if page == window.page {
            button::primary
        } else {
            button::secondary
        };
        bar = bar.push(
            button(text(page.to_string()))
                .on_press(Message::Navigate(PageNav::Page(page)))
                .style(style),
        );
    }

    bar = bar
        .push(nav("›", PageNav::Next, window.has_next()))
        .push(nav("»", PageNav::Last, window.has_next()));

    container(bar).center_x(Length::Fill).into()
}
