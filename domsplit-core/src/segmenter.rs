//! Word-break segmentation of an SLD
//!
//! Dynamic programming over char positions. Each position keeps one best
//! path per run state so that consecutive fallback characters collapse into
//! a single residual token instead of one token per character.
//!
//! Paths are compared on `(fallback_chars, token_count, rank_sum)`:
//! cover as much as possible with lexicon entries, then use as few tokens
//! as possible, then prefer the most common entries (acronyms rank 0, so
//! they win ties against words of the same length). Relaxation is strict,
//! so on a complete tie the first path found is kept.

use crate::lexicon::{EntryKind, Lexicon};
use crate::types::{Segmentation, Token, TokenSource};

/// Run state at a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    /// Last token is closed
    Boundary = 0,
    /// Inside an unmatched letter run
    InUnmatched = 1,
    /// Inside a digit run
    InNumeric = 2,
}

const STATES: [RunState; 3] = [
    RunState::Boundary,
    RunState::InUnmatched,
    RunState::InNumeric,
];

/// Lexicographic path cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
struct Cost {
    fallback_chars: usize,
    tokens: usize,
    rank_sum: u64,
}

#[derive(Debug, Clone, Copy)]
struct Step {
    from: usize,
    from_state: RunState,
    source: TokenSource,
    /// Continues the previous fallback token
    extends: bool,
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    cost: Cost,
    step: Option<Step>,
}

/// Segment an SLD into tokens.
///
/// Matching is ASCII case-insensitive; token text keeps the input's
/// characters. Never fails: unexplained characters become `Unmatched` or
/// `Numeric` tokens and an empty input yields an empty segmentation.
pub fn segment(sld: &str, lexicon: &dyn Lexicon) -> Segmentation {
    let chars: Vec<char> = sld.chars().collect();
    segment_chars(&chars, lexicon)
}

/// Segment a pre-split char slice
pub fn segment_chars(chars: &[char], lexicon: &dyn Lexicon) -> Segmentation {
    let n = chars.len();
    if n == 0 {
        return Segmentation::empty();
    }

    let mut table: Vec<[Option<Cell>; 3]> = vec![[None; 3]; n + 1];
    table[0][RunState::Boundary as usize] = Some(Cell {
        cost: Cost::default(),
        step: None,
    });

    for i in 0..n {
        if table[i].iter().all(Option::is_none) {
            continue;
        }

        let ch = chars[i];
        let matches = if ch.is_alphanumeric() {
            lexicon.matches_at(chars, i)
        } else {
            Vec::new()
        };

        for state in STATES {
            let Some(cell) = table[i][state as usize] else {
                continue;
            };

            if !ch.is_alphanumeric() {
                let cost = Cost {
                    tokens: cell.cost.tokens + 1,
                    ..cell.cost
                };
                relax(
                    &mut table,
                    i + 1,
                    RunState::Boundary,
                    cost,
                    Step {
                        from: i,
                        from_state: state,
                        source: TokenSource::Separator,
                        extends: false,
                    },
                );
                continue;
            }

            for m in &matches {
                let cost = Cost {
                    fallback_chars: cell.cost.fallback_chars,
                    tokens: cell.cost.tokens + 1,
                    rank_sum: cell.cost.rank_sum + u64::from(m.rank),
                };
                let source = match m.kind {
                    EntryKind::Word => TokenSource::Word,
                    EntryKind::Acronym => TokenSource::Acronym,
                };
                relax(
                    &mut table,
                    m.end,
                    RunState::Boundary,
                    cost,
                    Step {
                        from: i,
                        from_state: state,
                        source,
                        extends: false,
                    },
                );
            }

            let (target, source) = if ch.is_ascii_digit() {
                (RunState::InNumeric, TokenSource::Numeric)
            } else {
                (RunState::InUnmatched, TokenSource::Unmatched)
            };
            let extends = state == target;
            let cost = Cost {
                fallback_chars: cell.cost.fallback_chars + 1,
                tokens: cell.cost.tokens + usize::from(!extends),
                rank_sum: cell.cost.rank_sum,
            };
            relax(
                &mut table,
                i + 1,
                target,
                cost,
                Step {
                    from: i,
                    from_state: state,
                    source,
                    extends,
                },
            );
        }
    }

    let end_state = STATES
        .iter()
        .copied()
        .filter_map(|s| table[n][s as usize].map(|cell| (cell.cost, s)))
        .min_by_key(|(cost, _)| *cost)
        .map(|(_, s)| s)
        .unwrap_or(RunState::Boundary);

    rebuild(chars, &table, end_state)
}

fn relax(
    table: &mut [[Option<Cell>; 3]],
    pos: usize,
    state: RunState,
    cost: Cost,
    step: Step,
) {
    let slot = &mut table[pos][state as usize];
    let better = match slot {
        Some(existing) => cost < existing.cost,
        None => true,
    };
    if better {
        *slot = Some(Cell {
            cost,
            step: Some(step),
        });
    }
}

fn rebuild(chars: &[char], table: &[[Option<Cell>; 3]], end_state: RunState) -> Segmentation {
    let mut steps = Vec::new();
    let mut pos = chars.len();
    let mut state = end_state;

    while let Some(Cell {
        step: Some(step), ..
    }) = table[pos][state as usize]
    {
        steps.push((step.from, pos, step.source, step.extends));
        pos = step.from;
        state = step.from_state;
    }
    steps.reverse();

    let mut tokens: Vec<Token> = Vec::with_capacity(steps.len());
    for (start, end, source, extends) in steps {
        let text: String = chars[start..end].iter().collect();
        match tokens.last_mut() {
            Some(last) if extends && last.source == source => last.text.push_str(&text),
            _ => tokens.push(Token::new(text, source)),
        }
    }

    Segmentation::new(tokens)
}

/// Classify caller-supplied token texts against the lexicon.
///
/// Used for manual splits, where the boundaries are given and only the
/// token sources need to be decided. Empty pieces are dropped.
pub fn classify_tokens<S: AsRef<str>>(pieces: &[S], lexicon: &dyn Lexicon) -> Segmentation {
    let tokens = pieces
        .iter()
        .map(AsRef::as_ref)
        .filter(|piece| !piece.is_empty())
        .map(|piece| Token::new(piece, classify_piece(piece, lexicon)))
        .collect();
    Segmentation::new(tokens)
}

fn classify_piece(piece: &str, lexicon: &dyn Lexicon) -> TokenSource {
    let lower = piece.to_ascii_lowercase();
    match lexicon.entry_kind(&lower) {
        Some(EntryKind::Acronym) => TokenSource::Acronym,
        Some(EntryKind::Word) => TokenSource::Word,
        None if piece.chars().all(|c| c.is_ascii_digit()) => TokenSource::Numeric,
        None if piece.chars().all(|c| !c.is_alphanumeric()) => TokenSource::Separator,
        None => TokenSource::Unmatched,
    }
}
