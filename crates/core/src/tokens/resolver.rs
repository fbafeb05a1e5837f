use std::collections::{BTreeMap, HashMap};

use log::warn;
use thiserror::Error;

use super::{ModifierKind, RawToken, TokenValue};
use crate::color::{self, ColorError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("circular reference at `{token}`: {}", .chain.join(" -> "))]
    CircularReference { token: String, chain: Vec<String> },
    #[error("token `{token}` references unknown token `{target}`")]
    UnknownReference { token: String, target: String },
    #[error("token `{token}`: {source}")]
    InvalidColor { token: String, source: ColorError },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Pending,
    Visiting,
    Done,
}

/// Owned view of one file's color tokens, indexed for resolution.
///
/// Every node on the work stack is `Visiting`; meeting a `Visiting`
/// dependency therefore closes a cycle.
struct Arena<'a> {
    names: Vec<&'a str>,
    tokens: Vec<&'a RawToken>,
    index: HashMap<&'a str, usize>,
    marks: Vec<Mark>,
    values: Vec<Option<String>>,
}

/// Resolve every token of one file to a concrete color.
///
/// References (`{color.<name>}`) are followed, then the token's modifier is
/// applied. Brace values outside the `color` namespace are kept verbatim.
pub fn resolve_tokens(
    tokens: &BTreeMap<String, RawToken>,
) -> Result<BTreeMap<String, String>, ResolveError> {
    let mut arena = Arena::new(tokens);
    for root in 0..arena.names.len() {
        arena.resolve(root)?;
    }
    Ok(arena.into_resolved())
}

impl<'a> Arena<'a> {
    fn new(tokens: &'a BTreeMap<String, RawToken>) -> Self {
        let names: Vec<&str> = tokens.keys().map(String::as_str).collect();
        let index = names.iter().enumerate().map(|(i, n)| (*n, i)).collect();
        Self {
            tokens: tokens.values().collect(),
            marks: vec![Mark::Pending; names.len()],
            values: vec![None; names.len()],
            names,
            index,
        }
    }

    fn resolve(&mut self, root: usize) -> Result<(), ResolveError> {
        let mut stack = vec![root];
        while let Some(&current) = stack.last() {
            match self.marks[current] {
                Mark::Done => {
                    stack.pop();
                    continue;
                }
                Mark::Pending => self.marks[current] = Mark::Visiting,
                Mark::Visiting => {}
            }

            if let Some(next) = self.next_dependency(current, &stack)? {
                stack.push(next);
                continue;
            }

            let value = self.evaluate(current)?;
            self.values[current] = Some(value);
            self.marks[current] = Mark::Done;
            stack.pop();
        }
        Ok(())
    }

    /// Token names `index` depends on: its base reference, then a mix color.
    fn dependencies(&self, index: usize) -> [Option<&'a str>; 2] {
        let token = self.tokens[index];
        let mix = token.modifier.as_ref().and_then(|m| match &m.kind {
            ModifierKind::Mix { color } => color.reference(),
            _ => None,
        });
        [token.value.reference(), mix]
    }

    /// First dependency still pending, or a cycle error.
    fn next_dependency(
        &self,
        current: usize,
        stack: &[usize],
    ) -> Result<Option<usize>, ResolveError> {
        for target in self.dependencies(current).into_iter().flatten() {
            let dep = self.lookup(current, target)?;
            match self.marks[dep] {
                Mark::Done => {}
                Mark::Pending => return Ok(Some(dep)),
                Mark::Visiting => return Err(self.cycle(stack, dep)),
            }
        }
        Ok(None)
    }

    fn lookup(&self, from: usize, target: &str) -> Result<usize, ResolveError> {
        self.index
            .get(target)
            .copied()
            .ok_or_else(|| ResolveError::UnknownReference {
                token: self.names[from].to_string(),
                target: target.to_string(),
            })
    }

    fn cycle(&self, stack: &[usize], dep: usize) -> ResolveError {
        let start = stack.iter().position(|&i| i == dep).unwrap_or(0);
        let chain = stack[start..]
            .iter()
            .chain(std::iter::once(&dep))
            .map(|&i| self.names[i].to_string())
            .collect();
        ResolveError::CircularReference {
            token: self.names[dep].to_string(),
            chain,
        }
    }

    fn resolved(&self, from: usize, target: &str) -> Result<String, ResolveError> {
        let dep = self.lookup(from, target)?;
        Ok(self.values[dep].clone().unwrap_or_default())
    }

    /// Compute the value of a token whose dependencies are all resolved.
    fn evaluate(&self, index: usize) -> Result<String, ResolveError> {
        let name = self.names[index];
        let token = self.tokens[index];
        let invalid = |source: ColorError| ResolveError::InvalidColor {
            token: name.to_string(),
            source,
        };

        let base = match &token.value {
            TokenValue::Reference(target) => self.resolved(index, target)?,
            TokenValue::Passthrough(raw) => {
                warn!("token `{name}` keeps unresolved reference {raw}");
                return Ok(raw.clone());
            }
            TokenValue::Literal(raw) if color::is_valid_hex(raw) => color::normalize_hex(raw),
            TokenValue::Literal(raw) => {
                return Err(invalid(ColorError::InvalidColorFormat(raw.clone())));
            }
        };

        let Some(modifier) = &token.modifier else {
            return Ok(base);
        };
        if !color::is_valid_hex(&base) {
            // Base came through a passthrough reference; nothing to modify.
            warn!("token `{name}` drops its modifier on unresolved value {base}");
            return Ok(base);
        }

        let rgb = color::parse_hex(&base).map_err(invalid)?;
        let amount = modifier.amount;
        let value = match &modifier.kind {
            ModifierKind::Lighten => color::lighten(rgb, amount).to_hex(),
            ModifierKind::Darken => color::darken(rgb, amount).to_hex(),
            ModifierKind::Alpha => color::apply_alpha(rgb, amount),
            ModifierKind::Mix { color: other } => {
                let other = match other {
                    TokenValue::Reference(target) => self.resolved(index, target)?,
                    TokenValue::Literal(raw) | TokenValue::Passthrough(raw) => raw.clone(),
                };
                color::mix(rgb, &other, amount).map_err(invalid)?.to_hex()
            }
        };
        Ok(value)
    }

    fn into_resolved(self) -> BTreeMap<String, String> {
        // Every slot is filled once each root has been resolved.
        self.names
            .into_iter()
            .zip(self.values)
            .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
            .collect()
    }
}
