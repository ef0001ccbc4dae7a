//! Post summary extraction.
//!
//! A summary is the leading part of a rendered post body, cut from its
//! HTML tree. Only the first element at the top level decides the shape:
//!
//! | First element | Summary |
//! |---------------|---------|
//! | `div#documentDisplay` | its first non-text child, if that is a `<p>` |
//! | `div#preamble` | blocks of its `div.sectionbody` (or the whole preamble) |
//! | `div.paragraph` / `div.ulist` | it and the following blocks of the same kind |
//! | anything else | empty |
//!
//! Blocks are cut in one of two modes, chosen per body:
//!
//! - **manual cut**: the source contains [`MORE_MARKER`]; blocks are taken
//!   until the first block holding the marker, which is dropped.
//! - **count limit**: a fixed number of blocks, with [`ELLIPSIS`] marking
//!   where a preamble was cut.

use scraper::{ElementRef, Html};

/// Explicit cut marker written by authors.
pub const MORE_MARKER: &str = "<!-- more -->";

/// Placeholder appended where a preamble body was cut.
pub const ELLIPSIS: &str = "<p>[ ... ]</p>";

/// Stop once more than this many blocks were taken.
const BLOCK_LIMIT: usize = 2;

/// Preamble bodies with more children than this are cut at [`BLOCK_LIMIT`].
const CROWDED_BODY: usize = 5;

const LEGACY_ID: &str = "documentDisplay";
const PREAMBLE_ID: &str = "preamble";
const SECTION_BODY_CLASS: &str = "sectionbody";

/// Extract the summary of a rendered post body.
///
/// Pure: the input is parsed into a private tree and never modified.
/// Markup the parser has to repair is summarised as repaired; markup of an
/// unknown shape yields an empty summary.
pub fn extract_summary(content: &str) -> String {
    let fragment = Html::parse_fragment(content);
    let mode = if content.contains(MORE_MARKER) {
        Mode::ManualCut
    } else {
        Mode::CountLimit
    };

    let mut summary = Summary::new(mode);
    let mut state = State::AwaitingFirstChild;

    for element in fragment.root_element().children().filter_map(ElementRef::wrap) {
        state = match state {
            State::AwaitingFirstChild => summary.first(element),
            State::InBareBlockRun if is_block(element) => summary.bare_block(element),
            State::InBareBlockRun | State::Done => State::Done,
        };
        if state == State::Done {
            break;
        }
    }

    summary.out
}

/// Position of the top-level walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingFirstChild,
    InBareBlockRun,
    Done,
}

/// How blocks are cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    ManualCut,
    CountLimit,
}

/// Where the block being pushed comes from.
#[derive(Debug, Clone, Copy)]
enum Run {
    /// Child of a preamble section body; `crowded` when the body is long.
    Preamble { crowded: bool },
    /// Top-level paragraph or list block.
    Bare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Summary accumulator.
struct Summary {
    out: String,
    mode: Mode,
    /// Blocks taken in count-limit mode.
    taken: usize,
}

impl Summary {
    fn new(mode: Mode) -> Self {
        Self {
            out: String::new(),
            mode,
            taken: 0,
        }
    }

    /// Dispatch on the first top-level element.
    fn first(&mut self, element: ElementRef<'_>) -> State {
        if has_id(element, LEGACY_ID) {
            self.legacy(element);
            State::Done
        } else if has_id(element, PREAMBLE_ID) {
            self.preamble(element);
            State::Done
        } else if is_block(element) {
            self.bare_block(element)
        } else {
            State::Done
        }
    }

    fn legacy(&mut self, element: ElementRef<'_>) {
        let first = element
            .children()
            .find(|node| !node.value().is_text())
            .and_then(ElementRef::wrap);
        if let Some(paragraph) = first.filter(|el| el.value().name() == "p") {
            self.out = paragraph.html();
        }
    }

    fn preamble(&mut self, element: ElementRef<'_>) {
        let Some(body) = child_divs(element).find(|el| has_class(*el, SECTION_BODY_CLASS)) else {
            self.out.push_str(&element.html());
            return;
        };

        let blocks: Vec<_> = child_divs(body).collect();
        let run = Run::Preamble {
            crowded: blocks.len() > CROWDED_BODY,
        };
        for block in blocks {
            if self.push(block, run) == Flow::Stop {
                break;
            }
        }
    }

    fn bare_block(&mut self, element: ElementRef<'_>) -> State {
        match self.push(element, Run::Bare) {
            Flow::Continue => State::InBareBlockRun,
            Flow::Stop => State::Done,
        }
    }

    /// Take one block, deciding whether the walk goes on.
    fn push(&mut self, block: ElementRef<'_>, run: Run) -> Flow {
        let html = block.html();

        if self.mode == Mode::ManualCut {
            if html.contains(MORE_MARKER) {
                return Flow::Stop;
            }
            self.out.push_str(&html);
            return Flow::Continue;
        }

        if matches!(run, Run::Preamble { .. }) && !is_block(block) {
            self.out.push_str(ELLIPSIS);
            return Flow::Stop;
        }

        self.out.push_str(&html);
        self.taken += 1;

        match run {
            Run::Preamble { crowded: true } if self.taken > BLOCK_LIMIT => {
                self.out.push_str(ELLIPSIS);
                Flow::Stop
            }
            Run::Bare if self.taken > BLOCK_LIMIT => Flow::Stop,
            _ => Flow::Continue,
        }
    }
}

/// Direct `div` children of an element.
fn child_divs<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "div")
}

/// `div.paragraph` or `div.ulist`.
fn is_block(element: ElementRef<'_>) -> bool {
    element.value().name() == "div"
        && matches!(element.value().attr("class"), Some("paragraph" | "ulist"))
}

fn has_id(element: ElementRef<'_>, id: &str) -> bool {
    element.value().name() == "div" && element.value().attr("id") == Some(id)
}

fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().attr("class") == Some(class)
}
