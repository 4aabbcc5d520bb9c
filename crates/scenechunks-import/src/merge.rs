//! Coalesce runs of adjacent action blocks.

use scenechunks_core::Block;

/// Collapse any run of consecutive action blocks into one, joining the
/// fragments with a blank line. Non-action blocks pass through unchanged
/// and reset the run. Idempotent.
pub fn merge_adjacent_actions(body: Vec<Block>) -> Vec<Block> {
    let mut out = Vec::with_capacity(body.len());
    let mut pending: Option<String> = None;

    for block in body {
        match block {
            Block::Action { text } => match pending {
                Some(ref mut acc) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        let joined = format!("{}\n\n{}", acc.trim_end(), trimmed);
                        *acc = joined;
                    }
                }
                None => pending = Some(text),
            },
            other => {
                if let Some(acc) = pending.take() {
                    out.push(Block::Action { text: acc });
                }
                out.push(other);
            }
        }
    }

    if let Some(acc) = pending {
        out.push(Block::Action { text: acc });
    }

    out
}
