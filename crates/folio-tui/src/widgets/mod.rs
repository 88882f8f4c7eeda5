//! Ratatui widgets for the folio TUI.

pub mod about;
pub mod article_list;
pub mod command_bar;
pub mod footer;
pub mod help;
pub mod pagination_bar;
pub mod signup_form;
pub mod tab_bar;

/// Flatten a rendered buffer to text, one line per row.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
