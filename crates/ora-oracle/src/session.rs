//! Interactive oracle session.
//!
//! `OracleSession` owns the roll source, the chaos factor and the history,
//! and turns lines of user input into generator calls. Every roll is appended
//! to the history, and written to disk when the session has a history file.

use std::path::{Path, PathBuf};

use ora_core::variants::Likelihood;
use ora_core::{History, Registry, RollResult};
use ora_dice::RollSource;

use crate::chaos::ChaosFactor;
use crate::config::SessionConfig;
use crate::error::{OracleError, OracleResult};
use crate::generator::{
    parse_danger_level, parse_environment, parse_season, parse_size, parse_tier,
};
use crate::generators;

/// Entries shown by the `history` command.
const HISTORY_TAIL: usize = 10;

/// An interactive oracle session.
pub struct OracleSession {
    source: RollSource,
    chaos: ChaosFactor,
    history: History,
    registry: Registry,
    history_path: Option<PathBuf>,
}

impl OracleSession {
    /// Create a session. An existing history file is loaded and appended to.
    pub fn new(config: SessionConfig) -> OracleResult<Self> {
        let registry = Registry::builtin()?;
        let source = config
            .seed
            .map_or_else(RollSource::from_entropy, RollSource::seeded);
        let history = match &config.history_path {
            Some(path) if path.exists() => History::load(path)?,
            _ => History::new(),
        };
        tracing::debug!(
            seed = ?source.seed(),
            chaos = config.initial_chaos,
            entries = history.len(),
            "session started"
        );
        Ok(Self {
            source,
            chaos: ChaosFactor::new(config.initial_chaos),
            history,
            registry,
            history_path: config.history_path,
        })
    }

    /// Current chaos factor.
    pub fn chaos(&self) -> ChaosFactor {
        self.chaos
    }

    /// Everything rolled so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The registry used to restore history entries.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The history file, if any.
    pub fn history_path(&self) -> Option<&Path> {
        self.history_path.as_deref()
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> OracleResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "fate" | "ask" => self.do_fate(rest),
            "expect" => {
                let result = generators::expectation_check(&mut self.source)?;
                self.record(result.into())
            }
            "event" => {
                let result = generators::random_event(&mut self.source)?;
                self.record(result.into())
            }
            "meaning" => {
                let result = generators::discover_meaning(&mut self.source)?;
                self.record(result.into())
            }
            "scene" => {
                let result = generators::scene_check(&mut self.source, self.chaos)?;
                self.record(result.into())
            }
            "chaos" => self.do_chaos(rest),
            "reaction" => {
                let npc = (!rest.is_empty()).then_some(rest);
                let result = generators::npc_reaction(&mut self.source, npc)?;
                self.record(result.into())
            }
            "npc" => self.do_npc(rest),
            "name" => {
                let result = generators::npc_name(&mut self.source)?;
                self.record(result.into())
            }
            "settlement" | "town" => {
                let size = if rest.is_empty() {
                    Default::default()
                } else {
                    parse_size(rest)?
                };
                let result = generators::settlement(&mut self.source, size)?;
                self.record(result.into())
            }
            "dungeon" => {
                let level = if rest.is_empty() {
                    1
                } else {
                    parse_danger_level(rest)?
                };
                let result = generators::dungeon_encounter(&mut self.source, level)?;
                self.record(result.into())
            }
            "trap" => {
                let result = generators::dungeon_trap(&mut self.source)?;
                self.record(result.into())
            }
            "room" => {
                let result = generators::dungeon_room(&mut self.source)?;
                self.record(result.into())
            }
            "detail" => {
                let result = generators::dungeon_detail(&mut self.source)?;
                self.record(result.into())
            }
            "item" => {
                let result = generators::item_creation(&mut self.source, true)?;
                self.record(result.into())
            }
            "treasure" | "loot" => {
                let tier = if rest.is_empty() { 1 } else { parse_tier(rest)? };
                let result = generators::treasure_hoard(&mut self.source, tier)?;
                self.record(result.into())
            }
            "weather" => {
                let season = if rest.is_empty() {
                    Default::default()
                } else {
                    parse_season(rest)?
                };
                let result = generators::weather(&mut self.source, season)?;
                self.record(result.into())
            }
            "wild" | "wilderness" => {
                let environment = if rest.is_empty() {
                    Default::default()
                } else {
                    parse_environment(rest)?
                };
                let result = generators::wilderness_encounter(&mut self.source, environment)?;
                self.record(result.into())
            }
            "roll" => {
                if rest.is_empty() {
                    return Err(OracleError::InvalidChoice(
                        "usage: roll <NdM>".to_string(),
                    ));
                }
                let result = generators::roll_notation(&mut self.source, rest)?;
                self.record(result)
            }
            "history" => Ok(self.do_history()),
            "export" => self.do_export(rest),
            "status" => Ok(self.do_status()),
            "help" => Ok(help(rest)),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(OracleError::UnknownCommand(cmd)),
        }
    }

    /// Append a result to the history, save, and render it.
    fn record(&mut self, result: RollResult) -> OracleResult<String> {
        self.history.append(&result);
        if let Some(path) = &self.history_path {
            self.history.save(path)?;
        }
        Ok(render(&result))
    }

    fn do_fate(&mut self, rest: &str) -> OracleResult<String> {
        let (likelihood, question) = parse_fate_input(rest);
        let question = (!question.is_empty()).then_some(question);
        let result = generators::fate_check(&mut self.source, likelihood, question)?;
        let header = format!("{likelihood}, {:+}", likelihood.modifier());
        let body = self.record(result.into())?;
        Ok(format!("({header}) {body}"))
    }

    fn do_chaos(&mut self, rest: &str) -> OracleResult<String> {
        match rest.to_lowercase().as_str() {
            "" => {}
            "up" | "+" => self.chaos.increase(),
            "down" | "-" => self.chaos.decrease(),
            other => {
                return Err(OracleError::InvalidChoice(format!(
                    "unknown chaos change '{other}', use: up, down"
                )));
            }
        }
        Ok(format!("Chaos Factor: {}", self.chaos))
    }

    fn do_npc(&mut self, rest: &str) -> OracleResult<String> {
        match rest.to_lowercase().as_str() {
            "" => {
                let result = generators::detailed_npc(&mut self.source)?;
                self.record(result.into())
            }
            "action" => {
                let result = generators::npc_action(&mut self.source)?;
                self.record(result.into())
            }
            "profile" => {
                let result = generators::npc_profile(&mut self.source)?;
                self.record(result.into())
            }
            other => Err(OracleError::InvalidChoice(format!(
                "unknown npc roll '{other}', use: npc, npc action, npc profile"
            ))),
        }
    }

    fn do_history(&self) -> String {
        if self.history.is_empty() {
            return "History is empty.".to_string();
        }
        let restored = self.history.restore(&self.registry);
        let start = restored.len().saturating_sub(HISTORY_TAIL);
        let recent = &restored[start..];

        let mut out = format!(
            "History ({} entries, showing last {}):\n\n",
            restored.len(),
            recent.len()
        );
        for result in recent {
            out.push_str(&result.to_string());
            out.push('\n');
        }
        out.trim_end().to_string()
    }

    fn do_export(&self, format: &str) -> OracleResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.history.export_markdown(&self.registry)),
            "text" | "txt" => Ok(self.history.export_text(&self.registry)),
            other => Err(OracleError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }

    fn do_status(&self) -> String {
        let mut out = format!("Chaos Factor: {}\n", self.chaos);
        match self.source.seed() {
            Some(seed) => out.push_str(&format!("Seed: {seed}\n")),
            None => out.push_str("Seed: random\n"),
        }
        out.push_str(&format!("Rolls: {}", self.history.len()));
        if let Some(path) = &self.history_path {
            out.push_str(&format!("\nHistory file: {}", path.display()));
        }
        out
    }
}

/// A result on one line, followed by its embedded results, indented.
fn render(result: &RollResult) -> String {
    let mut out = result.to_string();
    for child in result.embedded() {
        out.push_str("\n  - ");
        out.push_str(&child.to_string());
    }
    out
}

/// Parse fate input: `[likelihood] question`.
fn parse_fate_input(input: &str) -> (Likelihood, &str) {
    // Two-word likelihoods first, then single-word
    let words: Vec<&str> = input.splitn(3, ' ').collect();

    if words.len() >= 2 {
        let two_word = format!("{} {}", words[0], words[1]);
        if let Some(lk) = Likelihood::parse(&two_word) {
            return (lk, words.get(2).map(|s| s.trim()).unwrap_or(""));
        }
    }

    if let Some(lk) = Likelihood::parse(words[0]) {
        return (lk, input[words[0].len()..].trim_start());
    }

    (Likelihood::Even, input)
}

fn help(topic: &str) -> String {
    match topic.to_lowercase().as_str() {
        "oracle" | "fate" => "\
Oracle Commands:
  fate [likelihood] <question>  Ask a yes/no question (2d6)
  expect                        Test an expectation (2dF)
  event                         Generate a random event
  meaning                       Roll an adjective and a noun
  scene                         Check a new scene against chaos
  chaos [up|down]               Show or change the chaos factor

Likelihood: impossible, very unlikely, unlikely, even, 50/50,
  likely, very likely, near certain, certain"
            .to_string(),
        "npc" | "npcs" => "\
NPC Commands:
  npc                           Name, profile and reaction
  npc action                    What the NPC does
  npc profile                   Personality, need and motive
  name                          Roll a name
  reaction [npc]                Roll a reaction (2d10)"
            .to_string(),
        "places" | "dungeon" | "settlement" => "\
Place Commands:
  settlement [size]             hamlet, village, town, city
  dungeon [level]               Encounter at danger level 1-5
  room                          A room and its feature
  trap                          A trap and its trigger
  detail                        Room condition and dressing
  weather [season]              spring, summer, autumn, winter
  wild [environment]            forest, mountains, plains, swamp,
                                desert, coast, tundra"
            .to_string(),
        "loot" | "treasure" | "item" => "\
Loot Commands:
  item                          A complete item
  treasure [tier]               Coins and maybe an item, tier 1-4"
            .to_string(),
        _ => "\
Oracle Session Commands:
  fate [likelihood] <question>  Ask the oracle
  expect | event | meaning      Other oracle rolls
  scene                         Check a new scene
  chaos [up|down]               Chaos factor
  npc | name | reaction [npc]   NPC rolls
  settlement | dungeon | room   Place rolls
  trap | detail | weather | wild
  item | treasure [tier]        Loot rolls
  roll <NdM>                    Roll dice, e.g. 3d6 or 4dF
  history                       Show recent rolls
  export [markdown|text]        Export the full history
  status                        Show session status
  help [topic]                  Show help (oracle, npc, places, loot)
  quit                          Exit"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> OracleSession {
        OracleSession::new(SessionConfig::default().with_seed(42)).unwrap()
    }

    #[test]
    fn create_session() {
        let s = test_session();
        assert_eq!(s.chaos().value(), 5);
        assert!(s.history().is_empty());
        assert!(s.history_path().is_none());
    }

    #[test]
    fn fate_query() {
        let mut s = test_session();
        let output = s.process("fate likely Is there a guard?").unwrap();
        assert!(output.contains("Likely, +2"));
        assert!(output.contains("Fate Check"));
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn fate_default_likelihood() {
        let mut s = test_session();
        let output = s.process("fate Is it raining?").unwrap();
        assert!(output.contains("Even, +0"));
    }

    #[test]
    fn fate_two_word_likelihood() {
        let mut s = test_session();
        let output = s.process("fate very unlikely Did the dragon wake?").unwrap();
        assert!(output.contains("Very Unlikely, -4"));
    }

    #[test]
    fn parse_fate_input_variants() {
        assert_eq!(
            parse_fate_input("likely Is there a guard?"),
            (Likelihood::Likely, "Is there a guard?")
        );
        assert_eq!(
            parse_fate_input("near certain Is it dark?"),
            (Likelihood::NearCertain, "Is it dark?")
        );
        assert_eq!(parse_fate_input("Is it raining?"), (Likelihood::Even, "Is it raining?"));
        assert_eq!(parse_fate_input("unlikely"), (Likelihood::Unlikely, ""));
        assert_eq!(parse_fate_input(""), (Likelihood::Even, ""));
    }

    #[test]
    fn every_roll_command_is_recorded() {
        let mut s = test_session();
        let commands = [
            "expect", "event", "meaning", "scene", "reaction Mira", "npc", "npc action",
            "npc profile", "name", "settlement town", "dungeon 3", "trap", "room", "detail",
            "item", "treasure 2", "weather winter", "wild swamp", "roll 3d6", "roll 4dF",
        ];
        for (i, cmd) in commands.iter().enumerate() {
            s.process(cmd).unwrap();
            assert_eq!(s.history().len(), i + 1, "{cmd} was not recorded");
        }
        let restored = s.history().restore(s.registry());
        assert!(restored.iter().all(|r| !r.contains_generic()));
    }

    #[test]
    fn non_roll_commands_leave_history_alone() {
        let mut s = test_session();
        for cmd in ["chaos", "chaos up", "status", "help", "help oracle", "history", "export"] {
            s.process(cmd).unwrap();
        }
        assert!(s.history().is_empty());
    }

    #[test]
    fn chaos_changes() {
        let mut s = test_session();
        assert_eq!(s.process("chaos up").unwrap(), "Chaos Factor: 6/9");
        s.process("chaos down").unwrap();
        s.process("chaos down").unwrap();
        assert_eq!(s.chaos().value(), 4);
        assert!(s.process("chaos sideways").is_err());
    }

    #[test]
    fn invalid_arguments() {
        let mut s = test_session();
        assert!(matches!(
            s.process("dungeon 9"),
            Err(OracleError::InvalidDangerLevel(9))
        ));
        assert!(matches!(
            s.process("weather monsoon"),
            Err(OracleError::InvalidParameter(_))
        ));
        assert!(matches!(s.process("roll"), Err(OracleError::InvalidChoice(_))));
        assert!(matches!(s.process("roll 2x6"), Err(OracleError::Dice(_))));
        assert!(matches!(
            s.process("dance"),
            Err(OracleError::UnknownCommand(c)) if c == "dance"
        ));
        assert!(s.history().is_empty());
    }

    #[test]
    fn same_seed_same_session() {
        let mut a = test_session();
        let mut b = test_session();
        for cmd in ["fate likely Is it safe?", "npc", "treasure 3", "roll 5d20"] {
            a.process(cmd).unwrap();
            b.process(cmd).unwrap();
        }
        let dice = |s: &OracleSession| -> Vec<Vec<i32>> {
            s.history()
                .entries()
                .iter()
                .map(|d| d.dice_values.clone())
                .collect()
        };
        assert_eq!(dice(&a), dice(&b));
    }

    #[test]
    fn history_and_export() {
        let mut s = test_session();
        assert_eq!(s.process("history").unwrap(), "History is empty.");
        s.process("roll 2d6").unwrap();
        s.process("event").unwrap();
        let history = s.process("history").unwrap();
        assert!(history.contains("2 entries"));
        assert!(history.contains("2d6"));

        let md = s.process("export").unwrap();
        assert!(md.starts_with("# Session History"));
        let text = s.process("export text").unwrap();
        assert!(text.starts_with("Session History"));
        assert!(s.process("export pdf").is_err());
    }

    #[test]
    fn history_file_is_written_and_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let config = SessionConfig::default().with_seed(7).with_history(&path);

        let mut first = OracleSession::new(config.clone()).unwrap();
        first.process("roll 1d20").unwrap();
        first.process("weather summer").unwrap();
        assert!(path.exists());

        let mut second = OracleSession::new(config).unwrap();
        assert_eq!(second.history().len(), 2);
        second.process("event").unwrap();
        assert_eq!(History::load(&path).unwrap().len(), 3);
        assert!(second.process("status").unwrap().contains("History file"));
    }

    #[test]
    fn status_reports_seed() {
        let mut s = test_session();
        let status = s.process("status").unwrap();
        assert!(status.contains("Chaos Factor: 5/9"));
        assert!(status.contains("Seed: 42"));
        assert!(status.contains("Rolls: 0"));
    }

    #[test]
    fn help_topics() {
        let mut s = test_session();
        assert!(s.process("help").unwrap().contains("Oracle Session Commands"));
        assert!(s.process("help npc").unwrap().contains("NPC Commands"));
        assert!(s.process("help loot").unwrap().contains("treasure"));
    }

    #[test]
    fn quit() {
        let mut s = test_session();
        assert_eq!(s.process("quit").unwrap(), "Goodbye!");
        assert_eq!(s.process("q").unwrap(), "Goodbye!");
    }

    #[test]
    fn empty_input() {
        let mut s = test_session();
        assert_eq!(s.process("   ").unwrap(), "");
    }
}
