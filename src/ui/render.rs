use crate::ui::app::App;
use crate::ui::feed::FeedView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw<S>(frame: &mut Frame<'_>, app: &App<S>, endpoint: &str) {
    let (header, body, footer) = layout_regions(frame.area());
    let feed = app.feed();

    frame.render_widget(Header::new(endpoint, feed.loading()), header);
    frame.render_widget(Clear, body);
    frame.render_widget(FeedView::new(feed, app.scroll_top()), body);
    frame.render_widget(Footer::new(feed.page, feed.item_count()), footer);
}
