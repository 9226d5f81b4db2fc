use crate::models::{Block, IntervalSpec, Load, Mode, Movement, RestMarker, RoundInsert};
use crate::reference::ReferenceIndex;

use super::load::extract_load;
use super::mode::ModeDeclaration;
use super::normalize::NormalizedLine;
use super::quantity::{self, clean_name};
use super::resolve::resolve_movement;
use super::rules::{Directive, LineContext, classify};

const TABATA: IntervalSpec = IntervalSpec {
    work_seconds: 20,
    rest_seconds: 10,
};
const TABATA_ROUNDS: u32 = 8;
/// Upper bound on any stated round count; row expansion scales with it.
pub const MAX_ROUNDS: u32 = 200;

/// What a movement-shaped line turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum MovementLine {
    Movement(Movement),
    /// A load with nothing to perform, e.g. `Using a 48kg KB`.
    LoadOnly(Load),
}

/// Reads one movement line: load first, then quantity, then the name.
pub fn read_movement(display: &str, index: &ReferenceIndex) -> Option<MovementLine> {
    let load = extract_load(display);
    let text = load
        .as_ref()
        .map_or(display, |hit| hit.remainder.as_str());

    let (name, quantity, sets) = match quantity::extract(text) {
        Some(hit) => (hit.name, Some(hit.quantity), hit.sets),
        None => {
            let name = clean_name(text);
            if let Some(hit) = &load {
                if name.is_empty() || index.exercise(&name).is_none() {
                    return Some(MovementLine::LoadOnly(hit.load.clone()));
                }
            }
            if name.chars().count() <= 2 && index.exercise(&name).is_none() {
                return None;
            }
            (name, None, None)
        }
    };

    if !name.chars().any(char::is_alphabetic) {
        return None;
    }

    let resolved = resolve_movement(&name, quantity, index);
    let load = load.map(|hit| hit.load);
    let mut equipment_tags = resolved.equipment;
    if let Some(implement) = load.as_ref().and_then(Load::implement) {
        push_unique(&mut equipment_tags, implement.equipment_name());
    }

    Some(MovementLine::Movement(Movement {
        canonical_name: resolved.name,
        raw_text: display.trim().to_string(),
        quantity,
        sets,
        load,
        equipment_tags,
        body_part_tags: resolved.body_parts,
        notes: None,
        source: resolved.source,
    }))
}

fn push_unique(tags: &mut Vec<String>, tag: &str) {
    if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
        tags.push(tag.to_string());
    }
}

fn attach_load(movement: &mut Movement, load: Load) {
    if let Some(implement) = load.implement() {
        push_unique(&mut movement.equipment_tags, implement.equipment_name());
    }
    movement.load = Some(load);
}

/// Output of a finished assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembled {
    pub title: Option<String>,
    /// Never empty.
    pub blocks: Vec<Block>,
    pub notes: Vec<String>,
}

/// Folds normalized lines into blocks.
pub struct BlockAssembler<'a> {
    index: &'a ReferenceIndex,
    current: Block,
    blocks: Vec<Block>,
    title: Option<String>,
    notes: Vec<String>,
    pending_load: Option<Load>,
    seen_content: bool,
}

impl<'a> BlockAssembler<'a> {
    pub fn new(index: &'a ReferenceIndex) -> Self {
        Self {
            index,
            current: Block::default(),
            blocks: vec![],
            title: None,
            notes: vec![],
            pending_load: None,
            seen_content: false,
        }
    }

    pub fn push(&mut self, line: &NormalizedLine) {
        if !line.is_content() {
            log::trace!("skipping blank or decorative line {:?}", line.raw);
            return;
        }

        let ctx = LineContext {
            line,
            is_first: !self.seen_content,
            index: self.index,
        };
        self.seen_content = true;

        if let Some((kind, directive)) = classify(&ctx) {
            log::debug!("rule {kind:?} claimed {:?}", line.display);
            self.apply(directive, line);
            return;
        }

        match read_movement(&line.display, self.index) {
            Some(MovementLine::Movement(movement)) => self.push_movement(movement),
            Some(MovementLine::LoadOnly(load)) => self.place_load(load),
            None => log::trace!("nothing to keep in {:?}", line.display),
        }
    }

    pub fn finish(mut self) -> Assembled {
        self.flush_pending_load();
        if !(self.current.is_empty() && !self.blocks.is_empty()) {
            let block = std::mem::take(&mut self.current);
            self.seal(block);
        }
        Assembled {
            title: self.title,
            blocks: self.blocks,
            notes: self.notes,
        }
    }

    fn apply(&mut self, directive: Directive, line: &NormalizedLine) {
        match directive {
            Directive::Title(title) => self.title = Some(title),
            Directive::OpenBlock { title, mode } => {
                self.close_block();
                self.current = Block::titled(title);
                if let Some(decl) = mode {
                    self.apply_mode(decl);
                }
            }
            Directive::Mode(decl) => self.apply_mode(decl),
            Directive::RestBetweenBlocks(seconds) => {
                self.current.rest_between_blocks_seconds = Some(seconds);
            }
            Directive::Insert { every, body } => match read_movement(&body, self.index) {
                Some(MovementLine::Movement(movement)) => {
                    self.current
                        .per_round_inserts
                        .push(RoundInsert { every, movement });
                }
                _ => self.notes.push(line.display.clone()),
            },
            Directive::Interval(spec) => {
                self.current.interval = Some(spec);
                self.current.mode = Some(Mode::Intervals);
            }
            Directive::Tabata { body } => {
                self.current.interval = Some(TABATA);
                self.current.rounds.get_or_insert(TABATA_ROUNDS);
                self.current.mode.get_or_insert(Mode::Intervals);
                if let Some(MovementLine::Movement(movement)) =
                    body.and_then(|b| read_movement(&b, self.index))
                {
                    self.push_movement(movement);
                }
            }
            Directive::CompleteSets(sets) => {
                self.current.rounds = Some(sets);
                self.current.mode.get_or_insert(Mode::Intervals);
            }
            Directive::RepScheme(scheme) => {
                self.current.ladder_scheme = Some(scheme);
                self.current.mode.get_or_insert(Mode::Ladder);
            }
            Directive::Rounds(rounds) => {
                if self.current.rounds.is_none() {
                    self.current.rounds = Some(rounds);
                    self.current.mode.get_or_insert(Mode::FixedRounds { rounds });
                } else {
                    self.notes.push(line.display.clone());
                }
            }
            Directive::Note(note) => self.notes.push(note),
            Directive::Rest(seconds) => self.current.rests.push(RestMarker {
                position: self.current.sequence.len(),
                seconds,
                raw_text: line.display.clone(),
            }),
        }
    }

    fn apply_mode(&mut self, decl: ModeDeclaration) {
        if self.current.rounds.is_none() {
            self.current.rounds = decl.mode.rounds().or(decl.rounds);
        }
        if decl.ladder_scheme.is_some() {
            self.current.ladder_scheme = decl.ladder_scheme;
        }
        self.current.mode = Some(decl.mode);
    }

    fn push_movement(&mut self, mut movement: Movement) {
        if movement.load.is_none() {
            if let Some(load) = self.pending_load.take() {
                attach_load(&mut movement, load);
            }
        }
        self.current.sequence.push(movement);
    }

    /// Gives a load-only line to the previous movement, or holds it for the next one.
    fn place_load(&mut self, load: Load) {
        match self.current.sequence.last_mut() {
            Some(last) if last.load.is_none() => attach_load(last, load),
            _ => {
                self.flush_pending_load();
                self.pending_load = Some(load);
            }
        }
    }

    fn flush_pending_load(&mut self) {
        if let Some(load) = self.pending_load.take() {
            self.notes.push(load.to_string());
        }
    }

    fn close_block(&mut self) {
        self.flush_pending_load();
        let block = std::mem::take(&mut self.current);
        // An implicit leading block with nothing in it is dropped.
        if block.is_empty() && self.blocks.is_empty() {
            return;
        }
        self.seal(block);
    }

    fn seal(&mut self, mut block: Block) {
        if let Some(stated) = block.clamp_rounds(MAX_ROUNDS) {
            self.notes.push(format!("{stated} rounds capped at {MAX_ROUNDS}"));
        }
        self.blocks.push(block);
    }
}
