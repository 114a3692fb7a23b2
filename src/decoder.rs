//! Decoder for the line-oriented order summary reply.
//!
//! The model answers with `key = value` lines, optionally followed by an
//! `orderItems = [ {...}, {...} ]` block whose entries use `key: value`
//! fields. The reply is not JSON: quotes, commas and brackets are used
//! loosely, so decoding is a small state machine over trimmed lines.
//!
//! ```text
//! Scalar    --"orderItems = ..."--> ArrayOpen
//! ArrayOpen --"{"--> ItemOpen      --"}"--> ArrayOpen (item flushed)
//! ArrayOpen --"]"--> Scalar        ItemOpen --"]"--> Scalar (item flushed)
//! ItemOpen  --"{"--> ItemOpen (previous item flushed)
//! ```
//!
//! Items still open when the reply ends are dropped, not flushed.

use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, instrument, trace};

use crate::order::{OrderItem, OrderSummary};
use crate::text_utils::{clean_value, is_null_token, parse_bool, parse_quantity, strip_quotes};

const ORDER_ITEMS_KEY: &str = "orderItems";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("order summary reply is empty")]
    EmptyReply,
    #[error("orderItems[{index}] has no menuName")]
    MissingItemName { index: usize },
}

/// Fields collected for an `orderItems` entry that has not been closed yet.
#[derive(Debug, Default)]
struct PendingItem {
    menu_name: Option<String>,
    menu_style: Option<String>,
    menu_items: Option<String>,
    quantity: Option<u32>,
    has_fields: bool,
}

impl PendingItem {
    fn set(&mut self, key: &str, raw: &str) {
        self.has_fields = true;
        let value = item_value(raw);
        match key {
            "menuName" => self.menu_name = value,
            "menuStyle" => self.menu_style = value,
            "menuItems" => self.menu_items = value,
            "quantity" => self.quantity = value.as_deref().and_then(parse_quantity),
            other => debug!(key = other, "Ignoring unknown orderItems field"),
        }
    }

    fn into_item(self, index: usize) -> Result<OrderItem, DecodeError> {
        let menu_name = self
            .menu_name
            .ok_or(DecodeError::MissingItemName { index })?;
        Ok(OrderItem {
            menu_name,
            menu_style: self.menu_style,
            menu_items: self.menu_items,
            quantity: self.quantity.unwrap_or(1),
        })
    }
}

#[derive(Debug)]
enum ParseState {
    Scalar,
    ArrayOpen,
    ItemOpen(PendingItem),
}

struct ReplyDecoder {
    state: ParseState,
    summary: OrderSummary,
}

impl ReplyDecoder {
    fn new() -> Self {
        Self {
            state: ParseState::Scalar,
            summary: OrderSummary::default(),
        }
    }

    fn feed_line(&mut self, line: &str) -> Result<(), DecodeError> {
        if matches!(self.state, ParseState::Scalar) {
            return self.scalar_line(line);
        }
        for piece in split_structure(line) {
            self.feed_piece(&piece)?;
        }
        Ok(())
    }

    fn feed_piece(&mut self, piece: &str) -> Result<(), DecodeError> {
        self.state = match std::mem::replace(&mut self.state, ParseState::Scalar) {
            ParseState::Scalar => return self.scalar_line(piece),
            ParseState::ArrayOpen => Self::array_piece(piece),
            ParseState::ItemOpen(pending) => self.item_piece(pending, piece)?,
        };
        Ok(())
    }

    fn scalar_line(&mut self, line: &str) -> Result<(), DecodeError> {
        let Some((key, raw)) = line.split_once('=') else {
            trace!(?line, "Skipping line without assignment");
            return Ok(());
        };
        let key = key.trim();
        let raw = raw.trim();

        if line.starts_with(ORDER_ITEMS_KEY) {
            if !raw.is_empty() && is_null_token(raw) {
                trace!("orderItems is null");
                return Ok(());
            }
            trace!("Entering orderItems array");
            self.state = ParseState::ArrayOpen;
            for piece in split_structure(raw) {
                self.feed_piece(&piece)?;
            }
            return Ok(());
        }

        self.assign_scalar(key, raw);
        Ok(())
    }

    fn assign_scalar(&mut self, key: &str, raw: &str) {
        let value = clean_value(raw);
        let summary = &mut self.summary;
        match key {
            "customerName" => summary.customer_name = value,
            "customerAddress" => summary.customer_address = value,
            "menuName" => summary.menu_name = value,
            "menuStyle" => summary.menu_style = value,
            "menuItems" => summary.menu_items = value,
            "deliveryTime" => summary.delivery_time = value,
            "quantity" => summary.quantity = value.as_deref().and_then(parse_quantity),
            "couponCode" => summary.coupon_code = value,
            "useCoupon" => summary.use_coupon = value.as_deref().and_then(parse_bool),
            other => debug!(key = other, "Ignoring unknown summary key"),
        }
    }

    fn array_piece(piece: &str) -> ParseState {
        match piece {
            "[" => ParseState::ArrayOpen,
            "]" => {
                trace!("Closing orderItems array");
                ParseState::Scalar
            }
            "{" => ParseState::ItemOpen(PendingItem::default()),
            _ => {
                trace!(?piece, "Ignoring text outside an orderItems entry");
                ParseState::ArrayOpen
            }
        }
    }

    fn item_piece(
        &mut self,
        mut pending: PendingItem,
        piece: &str,
    ) -> Result<ParseState, DecodeError> {
        let next = match piece {
            "{" => {
                self.flush(pending)?;
                ParseState::ItemOpen(PendingItem::default())
            }
            "}" => {
                self.flush(pending)?;
                ParseState::ArrayOpen
            }
            "]" => {
                self.flush(pending)?;
                trace!("Closing orderItems array");
                ParseState::Scalar
            }
            "[" => ParseState::ItemOpen(pending),
            _ => {
                for (key, value) in split_fields(piece) {
                    pending.set(&key, &value);
                }
                ParseState::ItemOpen(pending)
            }
        };
        Ok(next)
    }

    fn flush(&mut self, pending: PendingItem) -> Result<(), DecodeError> {
        if !pending.has_fields {
            trace!("Skipping empty orderItems entry");
            return Ok(());
        }
        let item = pending.into_item(self.summary.order_items.len())?;
        trace!(menu = %item.menu_name, quantity = item.quantity, "Parsed order item");
        self.summary.order_items.push(item);
        Ok(())
    }

    fn finish(self) -> OrderSummary {
        match &self.state {
            ParseState::ItemOpen(pending) if pending.has_fields => {
                debug!("Reply ended inside an orderItems entry, dropping it")
            }
            ParseState::ItemOpen(_) | ParseState::ArrayOpen => {
                debug!("Reply ended without closing orderItems")
            }
            ParseState::Scalar => {}
        }
        let mut summary = self.summary;
        apply_single_menu_fallback(&mut summary);
        summary
    }
}

/// Mirror the single-menu fields into `order_items` when the reply used the
/// old format.
fn apply_single_menu_fallback(summary: &mut OrderSummary) {
    if !summary.order_items.is_empty() {
        return;
    }
    let Some(menu_name) = summary.menu_name.clone().filter(|n| !n.is_empty()) else {
        return;
    };
    debug!(menu = %menu_name, "Building order item from single-menu fields");
    summary.order_items.push(OrderItem {
        menu_name,
        menu_style: summary.menu_style.clone(),
        menu_items: summary.menu_items.clone(),
        quantity: summary.quantity.unwrap_or(1),
    });
}

/// Parse a raw model reply into an [`OrderSummary`].
#[instrument(level = "trace", skip(raw_text))]
pub fn parse_summary_text(raw_text: &str) -> Result<OrderSummary, DecodeError> {
    if raw_text.trim().is_empty() {
        return Err(DecodeError::EmptyReply);
    }

    let mut decoder = ReplyDecoder::new();
    for line in raw_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        decoder.feed_line(line)?;
    }
    let summary = decoder.finish();
    debug!(
        items = summary.order_items.len(),
        customer = ?summary.customer_name,
        "Decoded order summary"
    );
    Ok(summary)
}

impl FromStr for OrderSummary {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_summary_text(s)
    }
}

/// Strip a trailing comma and matching quotes, then map null tokens to `None`.
fn item_value(raw: &str) -> Option<String> {
    let value = raw.trim().trim_end_matches(',').trim();
    clean_value(strip_quotes(value))
}

/// Mark every character that sits inside a quoted value.
///
/// A quote only opens at the start of a value (after `:`, `,`, `{`, `[` or
/// at the start of the text) so apostrophes inside words stay literal.
fn quote_mask(text: &str) -> Vec<(char, bool)> {
    let mut out = Vec::with_capacity(text.len());
    let mut quote: Option<char> = None;
    let mut prev: Option<char> = None;
    for c in text.chars() {
        let quoted = match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
                true
            }
            None if (c == '\'' || c == '"')
                && matches!(prev, None | Some(':' | ',' | '{' | '[')) =>
            {
                quote = Some(c);
                true
            }
            None => false,
        };
        out.push((c, quoted));
        if !c.is_whitespace() {
            prev = Some(c);
        }
    }
    out
}

/// Split a line into bracket tokens and the text between them.
///
/// `{menuName: 'A'},` becomes `["{", "menuName: 'A'", "}"]`. A bracket is a
/// token only at the edge of the line or next to a comma or another
/// bracket, so `빵{특대}=1` stays literal. Text pieces are trimmed of
/// whitespace and surrounding commas; empty pieces are dropped.
fn split_structure(text: &str) -> Vec<String> {
    fn push_text(pieces: &mut Vec<String>, current: &mut String) {
        let piece = current.trim().trim_matches(',').trim();
        if !piece.is_empty() {
            pieces.push(piece.to_string());
        }
        current.clear();
    }

    fn significant<'a>(mut chars: impl Iterator<Item = &'a (char, bool)>) -> Option<char> {
        chars.find(|(c, _)| !c.is_whitespace()).map(|(c, _)| *c)
    }

    let mask = quote_mask(text);

    let mut pieces = Vec::new();
    let mut current = String::new();
    for (i, &(c, quoted)) in mask.iter().enumerate() {
        let is_bracket = !quoted && matches!(c, '{' | '}' | '[' | ']');
        let structural = is_bracket && {
            let prev = significant(mask[..i].iter().rev());
            let next = significant(mask[i + 1..].iter());
            matches!(prev, None | Some(',' | '{' | '['))
                || matches!(next, None | Some(',' | '}' | ']'))
        };
        if structural {
            push_text(&mut pieces, &mut current);
            pieces.push(c.to_string());
        } else {
            current.push(c);
        }
    }
    push_text(&mut pieces, &mut current);
    pieces
}

/// Split `key: value, key: value` text into fields.
///
/// Commas inside quotes do not split. A segment that does not start with
/// `identifier:` continues the previous value, so unquoted
/// `menuItems: 빵=1, 커피=2` stays one field.
fn split_fields(text: &str) -> Vec<(String, String)> {
    let mut segments = vec![String::new()];
    for (c, quoted) in quote_mask(text) {
        if c == ',' && !quoted {
            segments.push(String::new());
        } else if let Some(last) = segments.last_mut() {
            last.push(c);
        }
    }

    let mut fields: Vec<(String, String)> = Vec::new();
    for segment in segments {
        match field_key(&segment) {
            Some((key, value)) => fields.push((key, value.to_string())),
            None => {
                if let Some((_, value)) = fields.last_mut() {
                    value.push(',');
                    value.push_str(&segment);
                }
            }
        }
    }
    fields
}

fn field_key(segment: &str) -> Option<(String, &str)> {
    let (key, value) = segment.split_once(':')?;
    let key = strip_quotes(key.trim().trim_end_matches(',').trim());
    let is_identifier = !key.is_empty() && key.chars().all(|c| c.is_alphanumeric() || c == '_');
    is_identifier.then(|| (key.to_string(), value))
}
