//! Key-indexed matching.
//!
//! When every arm of an open-domain matcher is an exact key, a lookup table
//! replaces the linear scan of [`ValueMatcher`](crate::value::ValueMatcher):
//!
//! - [`KeyedMatcher`]: backed by `HashMap`, built at runtime
//! - [`PhfMatcher`]: backed by a compile-time `phf::Map` (feature `phf`)
//!
//! Both require a catch-all, which receives the original key.

use matcha_core::{Dispatch, MatchError, MatchResult};
use std::{collections::HashMap, fmt::Debug, hash::Hash};

type KeyHandler<T> = Box<dyn Fn() -> T + Send + Sync + 'static>;

type CatchAll<K, T> = Box<dyn Fn(K) -> T + Send + Sync + 'static>;

/// A dispatcher that looks up its handler by exact key.
pub struct KeyedMatcher<K, T> {
    name: &'static str,
    map: HashMap<K, KeyHandler<T>>,
    otherwise: CatchAll<K, T>,
}

impl<K, T> KeyedMatcher<K, T> {
    /// Start building a keyed matcher.
    pub fn builder() -> KeyedMatcherBuilder<K, T> {
        KeyedMatcherBuilder::default()
    }

    /// The dispatcher's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of keyed arms, not counting the catch-all.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the matcher has only its catch-all.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Hash + Eq, T> KeyedMatcher<K, T> {
    /// Check if a key has its own arm.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }
}

impl<K: Hash + Eq, T> Dispatch<K> for KeyedMatcher<K, T> {
    type Output = T;

    fn dispatch(&self, key: K) -> T {
        match self.map.get(&key) {
            Some(handler) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(matcher = self.name, "keyed arm matched");
                handler()
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(matcher = self.name, "falling back to catch-all");
                (self.otherwise)(key)
            }
        }
    }
}

impl<K, T> Debug for KeyedMatcher<K, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedMatcher")
            .field("name", &self.name)
            .field("arms", &self.map.len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`KeyedMatcher`].
pub struct KeyedMatcherBuilder<K, T> {
    name: &'static str,
    map: HashMap<K, KeyHandler<T>>,
    allow_duplicates: bool,
}

impl<K, T> Default for KeyedMatcherBuilder<K, T> {
    fn default() -> Self {
        Self {
            name: "KeyedMatcher",
            map: HashMap::new(),
            allow_duplicates: false,
        }
    }
}

impl<K, T> KeyedMatcherBuilder<K, T> {
    /// Name the dispatcher for diagnostics and tracing.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Allow duplicate keys. The first arm declared for a key wins and later
    /// ones are ignored, mirroring first-match-wins dispatch.
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }
}

impl<K, T> KeyedMatcherBuilder<K, T>
where
    K: Hash + Eq + Debug,
{
    /// Add an arm for `key`.
    ///
    /// Returns [`MatchError::DuplicateKey`] if the key already has an arm and
    /// duplicates are not allowed.
    pub fn insert<H>(&mut self, key: K, handler: H) -> MatchResult<()>
    where
        H: Fn() -> T + Send + Sync + 'static,
    {
        if self.map.contains_key(&key) {
            if self.allow_duplicates {
                return Ok(());
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(matcher = self.name, ?key, "duplicate key rejected");
            return Err(MatchError::DuplicateKey(format!("{:?}", key)));
        }
        self.map.insert(key, Box::new(handler));
        Ok(())
    }

    /// Chaining form of [`insert`](Self::insert).
    pub fn arm<H>(mut self, key: K, handler: H) -> MatchResult<Self>
    where
        H: Fn() -> T + Send + Sync + 'static,
    {
        self.insert(key, handler)?;
        Ok(self)
    }

    /// Finish with a catch-all handler that receives every unknown key.
    pub fn otherwise<H>(self, handler: H) -> KeyedMatcher<K, T>
    where
        H: Fn(K) -> T + Send + Sync + 'static,
    {
        KeyedMatcher {
            name: self.name,
            map: self.map,
            otherwise: Box::new(handler),
        }
    }
}

/// A string-keyed dispatcher over a compile-time perfect hash map.
///
/// Arms are plain function pointers so the whole table can live in a
/// `static`.
///
/// # Example
///
/// ```rust,ignore
/// fn yes() -> bool { true }
/// fn no() -> bool { false }
/// fn other(_: &str) -> bool { false }
///
/// static ANSWERS: phf::Map<&'static str, fn() -> bool> = phf::phf_map! {
///     "Yes" => yes as fn() -> bool,
///     "No" => no as fn() -> bool,
/// };
///
/// static MATCHER: PhfMatcher<bool> = PhfMatcher::new(&ANSWERS, other);
/// ```
#[cfg(feature = "phf")]
pub struct PhfMatcher<T: 'static> {
    map: &'static phf::Map<&'static str, fn() -> T>,
    otherwise: fn(&str) -> T,
}

#[cfg(feature = "phf")]
impl<T: 'static> PhfMatcher<T> {
    /// Create a matcher from a static PHF map and a catch-all.
    pub const fn new(
        map: &'static phf::Map<&'static str, fn() -> T>,
        otherwise: fn(&str) -> T,
    ) -> Self {
        Self { map, otherwise }
    }

    /// Number of keyed arms, not counting the catch-all.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the matcher has only its catch-all.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(feature = "phf")]
impl<'k, T: 'static> Dispatch<&'k str> for PhfMatcher<T> {
    type Output = T;

    fn dispatch(&self, key: &'k str) -> T {
        match self.map.get(key) {
            Some(handler) => handler(),
            None => (self.otherwise)(key),
        }
    }
}
