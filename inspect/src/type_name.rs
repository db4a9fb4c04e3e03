//! Human-readable type names for tooltips and headers.
//!
//! Raw names come from [`std::any::type_name`] and are full of module paths
//! that only matter to the compiler (`alloc::vec::Vec<alloc::string::String>`).
//! [`TypeNames`] turns them into stable display strings and memoizes the
//! result per raw name. Names are never used for dispatch.
//!
//! Normalization runs in three stages:
//!
//! 1. strip keyword prefixes and private std module markers,
//! 2. normalize whitespace,
//! 3. apply the rewrite rules in registration order.
//!
//! The cache and rule table are interior-mutable and `!Sync`; an
//! [`Inspector`](crate::Inspector) owns one instance and callers sharing it
//! across threads must synchronize externally.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use regex::Regex;
use thiserror::Error;

/// Errors raised while registering rewrite rules.
#[derive(Error, Debug)]
pub enum TypeNameError {
    #[error("invalid type-name pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Removed before anything else: keyword prefixes, and the private module
/// between `std::collections::` / `alloc::collections::` and a collection.
const STRIPPED_MARKERS: &str = concat!(
    r"\b(?:struct|enum|union|class) ",
    r"|\b((?:std|alloc)::collections::)",
    r"(?:hash::map|hash::set|btree::map|btree::set|vec_deque|linked_list|binary_heap)::",
);

/// Rules every table starts with.
const BUILTIN_RULES: &[(&str, &str)] = &[
    (r",\s*alloc::alloc::Global>", ">"),
    (r"\balloc::string::String\b", "String"),
    (r"\balloc::vec::Vec<", "Vec<"),
    (r"\balloc::boxed::Box<", "Box<"),
    (r"\balloc::rc::(Rc|Weak)<", "$1<"),
    (r"\balloc::sync::(Arc|Weak)<", "$1<"),
    (
        r"\b(?:alloc|std)::collections::(VecDeque|LinkedList|BinaryHeap|BTreeMap|BTreeSet|HashMap|HashSet)<",
        "$1<",
    ),
    (r"\bcore::option::Option<", "Option<"),
    (r"\bcore::result::Result<", "Result<"),
    (r"\bcore::cell::(Cell|RefCell|OnceCell)<", "$1<"),
    (r"\bcore::marker::PhantomData<", "PhantomData<"),
    (r"\bstd::path::(PathBuf|Path)\b", "$1"),
    (r"\bcore::time::Duration\b", "Duration"),
];

struct Rule {
    pattern: Regex,
    replacement: String,
}

/// Cache counters, observable for diagnostics and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Memoizing type-name normalizer with a runtime-extensible rule table.
pub struct TypeNames {
    cache: RefCell<HashMap<String, Rc<str>>>,
    rules: RefCell<Vec<Rule>>,
    /// Pattern texts already in `rules`, so registration is idempotent.
    patterns: RefCell<HashSet<String>>,
    stats: Cell<CacheStats>,
    markers: Regex,
    whitespace: Regex,
    separators: Regex,
}

impl TypeNames {
    /// Creates a normalizer holding the built-in rules.
    pub fn new() -> Self {
        let names = Self {
            cache: RefCell::new(HashMap::new()),
            rules: RefCell::new(Vec::with_capacity(BUILTIN_RULES.len())),
            patterns: RefCell::new(HashSet::new()),
            stats: Cell::new(CacheStats::default()),
            markers: Regex::new(STRIPPED_MARKERS).expect("marker pattern is valid"),
            whitespace: Regex::new(r"\s+").expect("whitespace pattern is valid"),
            separators: Regex::new(r"\s*([<>\[\](),;])\s*").expect("separator pattern is valid"),
        };
        for (pattern, replacement) in BUILTIN_RULES {
            if let Err(err) = names.add_rule(pattern, replacement) {
                log::error!("Built-in type-name rule rejected: {err}");
            }
        }
        names
    }

    /// Normalizes a raw type name, serving repeated inputs from the cache.
    pub fn normalize(&self, raw: &str) -> Rc<str> {
        if let Some(hit) = self.cache.borrow().get(raw) {
            self.bump(|stats| stats.hits += 1);
            return Rc::clone(hit);
        }

        self.bump(|stats| stats.misses += 1);
        log::trace!("Normalizing type name {raw}");
        let normalized: Rc<str> = self.normalize_uncached(raw).into();
        self.cache
            .borrow_mut()
            .insert(raw.to_owned(), Rc::clone(&normalized));
        normalized
    }

    /// Normalized name of `T`.
    pub fn of<T: ?Sized>(&self) -> Rc<str> {
        self.normalize(std::any::type_name::<T>())
    }

    /// Registers a rewrite rule applied after the existing ones.
    ///
    /// Returns `Ok(false)` without changing anything when the same pattern
    /// text was registered before. The cache is never evicted: names
    /// normalized before the rule was added keep their cached form.
    pub fn add_rule(&self, pattern: &str, replacement: &str) -> Result<bool, TypeNameError> {
        if self.patterns.borrow().contains(pattern) {
            return Ok(false);
        }

        let compiled = Regex::new(pattern).map_err(|source| TypeNameError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;

        self.patterns.borrow_mut().insert(pattern.to_owned());
        self.rules.borrow_mut().push(Rule {
            pattern: compiled,
            replacement: replacement.to_owned(),
        });
        log::debug!("Registered type-name rule `{pattern}` -> `{replacement}`");
        Ok(true)
    }

    /// Number of rewrite rules, built-ins included.
    pub fn rule_count(&self) -> usize {
        self.rules.borrow().len()
    }

    /// Number of distinct raw names currently cached.
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.get()
    }

    fn bump(&self, update: impl FnOnce(&mut CacheStats)) {
        let mut stats = self.stats.get();
        update(&mut stats);
        self.stats.set(stats);
    }

    fn normalize_uncached(&self, raw: &str) -> String {
        let name = self.markers.replace_all(raw, "$1");
        let name = self.whitespace.replace_all(name.trim(), " ");
        let mut name = self
            .separators
            .replace_all(&name, |caps: &regex::Captures<'_>| match &caps[1] {
                "," => ", ".to_owned(),
                ";" => "; ".to_owned(),
                other => other.to_owned(),
            })
            .into_owned();

        for rule in self.rules.borrow().iter() {
            if rule.pattern.is_match(&name) {
                name = rule
                    .pattern
                    .replace_all(&name, rule.replacement.as_str())
                    .into_owned();
            }
        }
        name
    }
}

impl Default for TypeNames {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops module paths from every path in `name`.
///
/// `game::Wrapper<game::items::Sword>` becomes `Wrapper<Sword>`.
pub fn short_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut segment = String::new();
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            segment.clear();
            continue;
        }
        if c.is_alphanumeric() || c == '_' {
            segment.push(c);
        } else {
            out.push_str(&segment);
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(&segment);
    out
}

/// Names at least this long are wrapped by [`pretty`].
pub const PRETTY_WRAP_LEN: usize = 130;

/// Breaks long names at angle brackets, indenting each nesting level.
pub fn pretty(name: &str) -> String {
    if name.len() < PRETTY_WRAP_LEN {
        return name.to_owned();
    }

    const INDENT: &str = "    ";
    let mut out = String::with_capacity(name.len() * 2);
    let mut level = 0usize;
    for c in name.chars() {
        match c {
            '<' => {
                level += 1;
                out.push('<');
                out.push('\n');
                out.push_str(&INDENT.repeat(level));
            }
            '>' => {
                level = level.saturating_sub(1);
                out.push('\n');
                out.push_str(&INDENT.repeat(level));
                out.push('>');
            }
            _ => out.push(c),
        }
    }
    out
}
