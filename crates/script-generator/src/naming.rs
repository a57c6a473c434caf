//! Ordering & naming pass
//!
//! Imposes the canonical presentation order (stable sort by ascending
//! semi-major axis) and assigns final names, independent of generation
//! order. Each `finalize_*` function consumes the generated batch and
//! returns new, fully-named values; this is the only place names change.

use celestial::{CelestialObject, ObjectType};

/// Stable sort by ascending semi-major axis.
///
/// Ties keep their original relative order, which keeps repeated runs
/// diffable and keeps comet pair members adjacent to their barycenter.
pub fn sort_by_semi_major_axis(objects: &mut [CelestialObject]) {
    objects.sort_by(|a, b| a.semi_major_axis().total_cmp(&b.semi_major_axis()));
}

/// Order a regular-moon batch. Caller-supplied names are never rewritten.
pub fn finalize_moons(mut objects: Vec<CelestialObject>) -> Vec<CelestialObject> {
    sort_by_semi_major_axis(&mut objects);
    objects
}

/// Order a generic-object batch and assign `<parent>.<prefix><n>` names in
/// sorted order, with `n` counting up from `start_number`.
pub fn finalize_generic(
    mut objects: Vec<CelestialObject>,
    parent_body: &str,
    object_type: ObjectType,
    start_number: u32,
) -> Vec<CelestialObject> {
    sort_by_semi_major_axis(&mut objects);
    objects
        .into_iter()
        .enumerate()
        .map(|(i, object)| {
            let n = start_number + i as u32;
            object.renamed(format!("{}.{}{}", parent_body, object_type.prefix(), n))
        })
        .collect()
}

/// Order a comet batch and assign final names.
///
/// Walking the sorted batch, every barycenter and every single comet takes
/// the next `<parent>.C<n>` in sequence. A barycenter's two pair members
/// follow it directly (they share its axis, and the sort is stable); they
/// become `"<barycenter> A"` and `"<barycenter> B"` and are rebound to the
/// barycenter's final name as their parent.
pub fn finalize_comets(
    mut objects: Vec<CelestialObject>,
    parent_body: &str,
    starting_from: u32,
) -> Vec<CelestialObject> {
    sort_by_semi_major_axis(&mut objects);

    let mut seq = starting_from;
    let mut group_name = parent_body.to_string();
    let mut member_slot = 0usize;

    objects
        .into_iter()
        .map(|object| {
            if object.satellite {
                let suffix = if member_slot == 0 { "A" } else { "B" };
                member_slot += 1;
                let name = format!("{} {}", group_name, suffix);
                object.renamed(name).reparented(group_name.clone())
            } else {
                let name = format!("{}.C{}", parent_body, seq);
                seq += 1;
                if object.object_type == ObjectType::Barycenter {
                    group_name = name.clone();
                    member_slot = 0;
                }
                object.renamed(name)
            }
        })
        .collect()
}
