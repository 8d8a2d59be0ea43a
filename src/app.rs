use tracing::{debug, info, warn};
use crate::{
    cart::{Cart, OrderOutcome},
    input::Command,
    model::MenuItem,
};


pub const HELP: &str = "\
Commands
+<id>  add one of an item
-<id>  remove one of an item
o      place the order
c      clear all
q      quit";

// Whether the view keeps running after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

// Top-level view state: the cart plus whatever message is on screen
#[derive(Debug, Clone)]
pub struct View<'m> {
    cart: Cart<'m>,
    notice: Option<String>,
    status: Option<String>,
}


impl<'m> View<'m> {
    pub fn new(menu: &'m [MenuItem]) -> Self {
        View {
            cart: Cart::new(menu),
            notice: None,
            status: None,
        }
    }

    pub fn cart(&self) -> &Cart<'m> {
        &self.cart
    }

    // Open blocking notice, if any
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    // An open notice swallows the line that dismisses it
    pub fn handle_line(&mut self, line: &str) -> Flow {
        if self.notice.take().is_some() {
            debug!("notice dismissed");
            return Flow::Continue;
        }
        self.status = None;

        match line.parse::<Command>() {
            Ok(command) => self.apply(command),
            Err(err) => {
                warn!(%err, "rejected input");
                self.status = Some(err.to_string());
                Flow::Continue
            }
        }
    }

    pub fn apply(&mut self, command: Command) -> Flow {
        debug!(?command, "apply");
        match command {
            Command::Increment(id) => {
                if let Err(err) = self.cart.increment(id) {
                    self.status = Some(err.to_string());
                }
            }
            Command::Decrement(id) => {
                if let Err(err) = self.cart.decrement(id) {
                    self.status = Some(err.to_string());
                }
            }
            Command::Clear => self.cart.clear(),
            Command::Order => {
                let outcome = self.cart.place_order();
                match &outcome {
                    OrderOutcome::Placed(summary) => info!(
                        lines = summary.lines.len(),
                        subtotal = %summary.subtotal,
                        "order placed"
                    ),
                    OrderOutcome::Empty => info!("order attempted with empty cart"),
                }
                self.notice = Some(outcome.notice());
            }
            Command::Help => self.notice = Some(HELP.to_string()),
            Command::Quit => return Flow::Quit,
            Command::Nothing => {}
        }
        Flow::Continue
    }
}
