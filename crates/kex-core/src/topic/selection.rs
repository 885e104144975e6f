//! The user's chosen topics

use std::collections::HashSet;

use super::Topic;

/// Insertion-ordered set of selected topics.
///
/// Membership is a hash lookup on the exact topic text; iteration order is
/// the order topics were added and is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    order: Vec<Topic>,
    members: HashSet<Topic>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `topic` unless already present. Returns whether it was added.
    pub fn insert(&mut self, topic: Topic) -> bool {
        if self.members.contains(&topic) {
            return false;
        }
        self.members.insert(topic.clone());
        self.order.push(topic);
        true
    }

    /// Remove `topic` if present. Returns whether it was removed.
    pub fn remove(&mut self, topic: &str) -> bool {
        if !self.members.remove(topic) {
            return false;
        }
        self.order.retain(|t| t.as_str() != topic);
        true
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.members.contains(topic)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[Topic] {
        &self.order
    }

    pub fn get(&self, index: usize) -> Option<&Topic> {
        self.order.get(index)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<Topic> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = Topic>>(iter: I) -> Self {
        let mut set = SelectionSet::new();
        for topic in iter {
            set.insert(topic);
        }
        set
    }
}
