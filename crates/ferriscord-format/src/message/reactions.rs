use serde::{Deserialize, Serialize};

/// Emojis offered by the quick reaction picker.
pub const QUICK_REACTIONS: [&str; 8] = ["👍", "❤️", "😂", "😮", "😢", "😡", "👎", "🎉"];

/// One emoji and the users who reacted with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub emoji: String,
    pub users: Vec<String>,
}

impl Reaction {
    pub fn count(&self) -> usize {
        self.users.len()
    }

    pub fn has_reacted(&self, user: &str) -> bool {
        self.users.iter().any(|u| u == user)
    }
}

/// The reactions on a message, in first-added order.
///
/// A reaction exists only while at least one user holds it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reactions(Vec<Reaction>);

impl Reactions {
    pub fn iter(&self) -> impl Iterator<Item = &Reaction> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, emoji: &str) -> Option<&Reaction> {
        self.0.iter().find(|r| r.emoji == emoji)
    }

    /// Adds `user`'s reaction. Returns false if it was already there.
    pub fn add(&mut self, emoji: &str, user: &str) -> bool {
        match self.0.iter_mut().find(|r| r.emoji == emoji) {
            Some(reaction) if reaction.has_reacted(user) => false,
            Some(reaction) => {
                reaction.users.push(user.to_string());
                true
            }
            None => {
                self.0.push(Reaction {
                    emoji: emoji.to_string(),
                    users: vec![user.to_string()],
                });
                true
            }
        }
    }

    /// Removes `user`'s reaction. Returns false if there was none.
    pub fn remove(&mut self, emoji: &str, user: &str) -> bool {
        let Some(idx) = self.0.iter().position(|r| r.emoji == emoji) else {
            return false;
        };
        let reaction = &mut self.0[idx];
        let before = reaction.users.len();
        reaction.users.retain(|u| u != user);
        let removed = reaction.users.len() != before;
        if reaction.users.is_empty() {
            self.0.remove(idx);
        }
        removed
    }

    /// Clicking a reaction: removes it if `user` already reacted, adds it
    /// otherwise. Returns whether the user holds the reaction afterwards.
    pub fn toggle(&mut self, emoji: &str, user: &str) -> bool {
        if self.get(emoji).is_some_and(|r| r.has_reacted(user)) {
            self.remove(emoji, user);
            false
        } else {
            self.add(emoji, user);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_creates_then_extends() {
        let mut r = Reactions::default();
        assert!(r.add("👍", "alice"));
        assert!(r.add("👍", "bob"));
        assert!(!r.add("👍", "alice"));
        assert_eq!(r.len(), 1);
        assert_eq!(r.get("👍").unwrap().count(), 2);
    }

    #[test]
    fn remove_last_user_drops_reaction() {
        let mut r = Reactions::default();
        r.add("🎉", "alice");
        assert!(r.remove("🎉", "alice"));
        assert!(r.is_empty());
        assert!(!r.remove("🎉", "alice"));
    }

    #[test]
    fn remove_unknown_user_keeps_reaction() {
        let mut r = Reactions::default();
        r.add("🎉", "alice");
        assert!(!r.remove("🎉", "bob"));
        assert_eq!(r.get("🎉").unwrap().users, vec!["alice".to_string()]);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut r = Reactions::default();
        r.add("❤️", "bob");

        assert!(r.toggle("❤️", "alice"));
        assert!(r.get("❤️").unwrap().has_reacted("alice"));
        assert_eq!(r.get("❤️").unwrap().count(), 2);

        assert!(!r.toggle("❤️", "alice"));
        assert!(!r.get("❤️").unwrap().has_reacted("alice"));
        assert_eq!(r.get("❤️").unwrap().count(), 1);
    }

    #[test]
    fn order_is_first_added() {
        let mut r = Reactions::default();
        r.add("😂", "a");
        r.add("👍", "b");
        r.add("😂", "c");
        let emojis: Vec<_> = r.iter().map(|x| x.emoji.as_str()).collect();
        assert_eq!(emojis, vec!["😂", "👍"]);
    }

    #[test]
    fn quick_palette_has_no_duplicates() {
        let mut seen = QUICK_REACTIONS.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), QUICK_REACTIONS.len());
    }
}
