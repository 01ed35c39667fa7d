//! k nearest neighbor search over a pool of labeled records
//!
//! [`find_k_nearest`] keeps a working set of the `k` closest records seen so
//! far. the set is seeded with the first `k` records from the pool and every
//! later record replaces the current farthest entry only when it is strictly
//! closer, so records that tie with the farthest entry never evict the one
//! that was found first.
use std::collections::HashMap;
use std::hash::Hash;

use crate::distance::Metric;
use crate::error::{Error, Result};
use crate::record::FeatureRecord;

/// a single record selected by the search along with its distance from the
/// query and its position in the pool
#[derive(Debug)]
pub struct Neighbor<'a, L> {
    pub record: &'a FeatureRecord<L>,
    pub distance: f64,
    pub index: usize,
}

impl<L> Clone for Neighbor<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for Neighbor<'_, L> {}

/// the `k` closest records found for a query
#[derive(Debug, Clone)]
pub struct Neighbors<'a, L> {
    entries: Vec<Neighbor<'a, L>>,
}

impl<'a, L> Neighbors<'a, L> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Neighbor<'a, L>> {
        self.entries.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &'a L> + '_ {
        self.entries.iter().map(|entry| entry.record.label())
    }

    /// the distance of each neighbor, in the same order as [`Neighbors::iter`]
    pub fn distances(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.distance).collect()
    }

    /// the distance of the farthest record that was kept
    pub fn max_distance(&self) -> f64 {
        self.entries
            .iter()
            .map(|entry| entry.distance)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// the number of neighbors that carry the given label
    pub fn count_label(&self, label: &L) -> usize
    where
        L: PartialEq,
    {
        self.labels().filter(|found| *found == label).count()
    }

    /// collect the label groups and count how many are encountered
    pub fn label_groups(&self) -> HashMap<&'a L, u32>
    where
        L: Eq + Hash,
    {
        let mut groups = HashMap::with_capacity(self.entries.len());

        for label in self.labels() {
            groups
                .entry(label)
                // increment if the group was previously added
                .and_modify(|counter| *counter += 1)
                // insert if not already existing
                .or_insert(1);
        }

        groups
    }

    /// the neighbors ordered by ascending distance. records at the same
    /// distance keep the order they had in the pool
    pub fn sorted(&self) -> Vec<Neighbor<'a, L>> {
        let mut rtn = self.entries.clone();

        rtn.sort_by_key(|entry| entry.index);

        // floats dont implement std::cmp::Ord so sort by f64::total_cmp. the
        // sort is stable so ties stay in pool order
        rtn.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        rtn
    }
}

/// finds the `k` records in `pool` closest to `query`
///
/// a NaN distance never compares as closer or farther than anything else. if
/// one of the first `k` pool records is NaN distance from the query it
/// becomes the farthest entry and no later record can replace it, so the
/// working set stays as it was seeded. records with NaN features should be
/// filtered out before searching.
pub fn find_k_nearest<'a, L>(
    query: &FeatureRecord<L>,
    pool: &'a [FeatureRecord<L>],
    k: usize,
    metric: Metric,
) -> Result<Neighbors<'a, L>> {
    if k == 0 {
        return Err(Error::ZeroK);
    }

    if pool.len() < k {
        return Err(Error::InsufficientPoolSize {
            k,
            pool: pool.len(),
        });
    }

    let mut entries = Vec::with_capacity(k);

    for (index, record) in pool[..k].iter().enumerate() {
        entries.push(Neighbor {
            record,
            distance: query.distance_with(record, metric)?,
            index,
        });
    }

    let (mut max_index, mut max_distance) = farthest(&entries);

    for (index, record) in pool.iter().enumerate().skip(k) {
        let distance = query.distance_with(record, metric)?;

        if distance < max_distance {
            entries[max_index] = Neighbor {
                record,
                distance,
                index,
            };

            (max_index, max_distance) = farthest(&entries);
        }
    }

    Ok(Neighbors { entries })
}

/// the slot holding the largest distance. the first slot wins when several
/// share it
fn farthest<L>(entries: &[Neighbor<'_, L>]) -> (usize, f64) {
    let mut rtn = (0, entries[0].distance);

    for (slot, entry) in entries.iter().enumerate().skip(1) {
        if entry.distance > rtn.1 {
            rtn = (slot, entry.distance);
        }
    }

    rtn
}
