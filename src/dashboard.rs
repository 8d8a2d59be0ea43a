use std::{fmt::Write as _, io::{self, Write}};
use tokio::sync::mpsc;
use tracing::info;
use crate::{
    app::{Flow, View},
    input::InputEvent,
    menu::{LOGO_URL, TAGLINE, TITLE},
    model::MenuItem,
    utils::{bold, boxed, hyperlink, CLEAR_SCREEN},
};


fn render_header(out: &mut String, ansi: bool) {
    let _ = writeln!(out, "{}", hyperlink(LOGO_URL, "Whataburger Logo", ansi));
    let _ = writeln!(out, "{TAGLINE}");
    let _ = writeln!(out, "{}", bold(TITLE, ansi));
    let _ = writeln!(out, "{}", "=".repeat(48));
}

fn render_row(out: &mut String, item: &MenuItem, count: u32, ansi: bool) {
    let heading = format!("[{}] {}", item.id, item.title);
    let _ = writeln!(out, "{:<40}{:>8}", bold(&heading, ansi), item.price);
    let _ = writeln!(out, "    {}", item.description);
    let _ = writeln!(out, "    {}", hyperlink(item.image, "open image", ansi));
    let _ = writeln!(
        out,
        "    [-] {count} [+]    (-{id} / +{id})",
        id = item.id
    );
    let _ = writeln!(out, "{}", "-".repeat(48));
}


// Render the whole screen for the current view state
pub fn render(view: &View<'_>, ansi: bool) -> String {
    let mut out = String::new();
    if ansi {
        out.push_str(CLEAR_SCREEN);
    }

    render_header(&mut out, ansi);

    let cart = view.cart();
    for item in cart.menu() {
        render_row(&mut out, item, cart.count(item.id), ansi);
    }

    let _ = writeln!(
        out,
        "{}   Items: {}",
        bold(&format!("Subtotal: {}", cart.subtotal()), ansi),
        cart.total_items()
    );
    if cart.is_empty() {
        let _ = writeln!(out, "Your cart is empty. Type +<id> to add an item.");
    }
    let _ = writeln!(out, "[o] Order   [c] Clear all   [h] Help   [q] Quit");

    if let Some(status) = view.status() {
        let _ = writeln!(out, "! {status}");
    }

    if let Some(notice) = view.notice() {
        out.push('\n');
        out.push_str(&boxed(notice));
        let _ = writeln!(out, "press Enter to dismiss");
    }

    out
}


pub fn redraw_screen<W: Write>(out: &mut W, view: &View<'_>, ansi: bool) -> io::Result<()> {
    out.write_all(render(view, ansi).as_bytes())?;
    out.write_all(b"> ")?;
    out.flush()
}


// Own the view, apply input events and redraw after each one
pub async fn dashboard_task<'m, W: Write>(
    mut view: View<'m>,
    mut input_rx: mpsc::UnboundedReceiver<InputEvent>,
    out: &mut W,
    ansi: bool,
) -> io::Result<View<'m>> {
    redraw_screen(out, &view, ansi)?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            ev = input_rx.recv() => {
                match ev {
                    Some(InputEvent::Line(line)) => {
                        if view.handle_line(&line) == Flow::Quit {
                            info!("quit requested");
                            break;
                        }
                        redraw_screen(out, &view, ansi)?;
                    }
                    Some(InputEvent::Closed) | None => {
                        info!("input closed");
                        break;
                    }
                }
            }

            _ = &mut ctrl_c => {
                info!("interrupted");
                break;
            }
        }
    }

    writeln!(out)?;
    out.flush()?;
    Ok(view)
}
