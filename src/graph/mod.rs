//! Relationship graph over the property catalog.
//!
//! Directed graph whose nodes are canonical property names and whose edges
//! are dependency entries (property → dependency). Built once from a catalog
//! snapshot and read-only thereafter; queries never mutate it. Rebuild the
//! graph when the catalog is rebuilt.

use std::collections::BTreeSet;
use std::sync::Arc;

use hashbrown::{HashMap, HashSet};

use crate::catalog::PropertyCatalog;
use crate::model::{canonical_name, Property};
use crate::{Error, Result};

/// Maximum edge distance considered by [`RelationshipGraph::related`].
/// Keeps neighborhoods focused instead of pulling in half the catalog.
pub const RELATED_MAX_DEPTH: usize = 2;

/// Read-only dependency graph derived from a catalog snapshot.
pub struct RelationshipGraph {
    catalog: Arc<PropertyCatalog>,
    /// name → names it depends on (sorted).
    forward: HashMap<String, Vec<String>>,
    /// name → names depending on it (sorted).
    reverse: HashMap<String, Vec<String>>,
}

impl RelationshipGraph {
    /// Materialize forward and reverse adjacency from the catalog.
    pub fn build(catalog: Arc<PropertyCatalog>) -> Self {
        let mut forward: HashMap<String, Vec<String>> = HashMap::new();
        let mut reverse: HashMap<String, Vec<String>> = HashMap::new();

        for prop in catalog.all() {
            forward.entry(prop.name.clone()).or_default();
            reverse.entry(prop.name.clone()).or_default();
        }
        for prop in catalog.all() {
            for dep in &prop.dependencies {
                forward
                    .get_mut(&prop.name)
                    .expect("every catalog property has a forward slot")
                    .push(dep.clone());
                reverse.entry(dep.clone()).or_default().push(prop.name.clone());
            }
        }
        for edges in forward.values_mut().chain(reverse.values_mut()) {
            edges.sort_unstable();
            edges.dedup();
        }

        tracing::debug!(nodes = forward.len(), "relationship graph built");
        Self { catalog, forward, reverse }
    }

    /// Direct dependencies of `name`, ordered by name.
    pub fn dependencies_of(&self, name: &str) -> Result<Vec<String>> {
        let key = canonical_name(name);
        self.forward
            .get(&key)
            .cloned()
            .ok_or(Error::UnknownProperty(key))
    }

    /// Properties that directly depend on `name`, ordered by name.
    pub fn dependents_of(&self, name: &str) -> Result<Vec<String>> {
        let key = canonical_name(name);
        self.reverse
            .get(&key)
            .cloned()
            .ok_or(Error::UnknownProperty(key))
    }

    /// Related properties for a name or a category.
    ///
    /// A category returns its full membership; a property name returns its
    /// dependency neighborhood (dependencies and dependents) out to
    /// [`RELATED_MAX_DEPTH`], excluding the property itself. Results are
    /// ordered by canonical name.
    pub fn related(&self, name_or_category: &str) -> Result<Vec<Property>> {
        let key = canonical_name(name_or_category);

        if self.catalog.is_category(&key) {
            return Ok(self.catalog.by_category(&key).into_iter().cloned().collect());
        }
        if !self.forward.contains_key(&key) {
            return Err(Error::UnknownProperty(key));
        }

        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut frontier = vec![key.clone()];
        for _ in 0..RELATED_MAX_DEPTH {
            let mut next = Vec::new();
            for node in frontier {
                for neighbor in self.neighbors(&node) {
                    if neighbor != key && seen.insert(neighbor.clone()) {
                        next.push(neighbor);
                    }
                }
            }
            frontier = next;
        }

        Ok(seen
            .into_iter()
            .filter_map(|n| self.catalog.get(&n).cloned())
            .collect())
    }

    /// Topological implementation order over the induced subgraph: the given
    /// names plus their transitive catalog dependencies, dependencies before
    /// dependents. Kahn's algorithm; among ready properties the
    /// lexicographically smallest name wins, so the order is reproducible.
    ///
    /// Fails with [`Error::CyclicDependency`] naming every property on the
    /// cycle if the induced subgraph is cyclic.
    pub fn implementation_order<I, S>(&self, names: I) -> Result<Vec<Property>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Closure: requested names plus everything they transitively need.
        let mut induced: HashSet<String> = HashSet::new();
        let mut stack: Vec<String> = Vec::new();
        for name in names {
            let key = canonical_name(name.as_ref());
            if !self.forward.contains_key(&key) {
                return Err(Error::UnknownProperty(key));
            }
            if induced.insert(key.clone()) {
                stack.push(key);
            }
        }
        while let Some(node) = stack.pop() {
            for dep in &self.forward[&node] {
                if induced.insert(dep.clone()) {
                    stack.push(dep.clone());
                }
            }
        }

        // Kahn over the induced subgraph; BTreeSet gives the deterministic
        // lexicographic tie-break.
        let mut indegree: HashMap<&str, usize> = induced
            .iter()
            .map(|n| (n.as_str(), self.forward[n].len()))
            .collect();
        let mut ready: BTreeSet<&str> = indegree
            .iter()
            .filter(|&(_, &deg)| deg == 0)
            .map(|(&n, _)| n)
            .collect();

        let mut order = Vec::with_capacity(induced.len());
        while let Some(&node) = ready.first() {
            ready.remove(node);
            order.push(
                self.catalog
                    .get(node)
                    .expect("induced nodes come from the catalog")
                    .clone(),
            );
            for dependent in &self.reverse[node] {
                if let Some(deg) = indegree.get_mut(dependent.as_str()) {
                    *deg -= 1;
                    if *deg == 0 {
                        ready.insert(dependent.as_str());
                    }
                }
            }
            indegree.remove(node);
        }

        if order.len() < induced.len() {
            return Err(Error::CyclicDependency {
                cycle: self.extract_cycle(&indegree),
            });
        }
        Ok(order)
    }

    /// Union of dependency and dependent edges for one node.
    fn neighbors(&self, node: &str) -> impl Iterator<Item = String> + '_ {
        let fwd = self.forward.get(node).map(|v| v.as_slice()).unwrap_or(&[]);
        let rev = self.reverse.get(node).map(|v| v.as_slice()).unwrap_or(&[]);
        fwd.iter().chain(rev.iter()).cloned()
    }

    /// Recover one concrete cycle from the nodes Kahn's algorithm could not
    /// resolve. Walks dependency edges restricted to the unresolved set until
    /// a node repeats; starts from the smallest name so the report is
    /// deterministic.
    fn extract_cycle(&self, unresolved: &HashMap<&str, usize>) -> Vec<String> {
        let start = unresolved
            .keys()
            .min()
            .copied()
            .unwrap_or_default()
            .to_string();

        let mut path: Vec<String> = Vec::new();
        let mut on_path: HashSet<String> = HashSet::new();
        let mut node = start;
        loop {
            if on_path.contains(&node) {
                let pos = path.iter().position(|n| *n == node).unwrap_or(0);
                return path[pos..].to_vec();
            }
            on_path.insert(node.clone());
            path.push(node.clone());
            // Any unresolved dependency continues the walk; unresolved nodes
            // always have one, otherwise Kahn would have drained them.
            let next = self.forward[&node]
                .iter()
                .find(|d| unresolved.contains_key(d.as_str()))
                .cloned();
            match next {
                Some(n) => node = n,
                None => return path,
            }
        }
    }
}
