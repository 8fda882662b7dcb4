//! Stable, non-mutating sorts.

use std::cmp::Ordering;

use crate::types::{Player, User};

/// Returns a copy of `items` sorted ascending by the numeric key from `selector`.
///
/// The sort is stable: items with equal keys keep their input order. Keys are compared with a
/// total order in which `-0.0` equals `0.0` and NaN sorts after every number.
pub fn sort_by_number_field<T, F>(items: &[T], selector: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let mut keyed: Vec<(f64, &T)> = items.iter().map(|item| (normalize_key(selector(item)), item)).collect();
    keyed.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

fn normalize_key(key: f64) -> f64 {
    if key.is_nan() {
        // Positive quiet NaN orders after +inf under total_cmp.
        f64::NAN
    } else {
        // -0.0 + 0.0 == +0.0
        key + 0.0
    }
}

/// Returns a copy of `users` ordered by role rank (admin, editor, viewer), then by name.
///
/// Names compare case-insensitively first; names equal ignoring case fall back to exact order,
/// so `"ana"` sorts before `"Bob"` and `"Ana"` before `"ana"`.
pub fn sort_users(users: &[User]) -> Vec<User> {
    let mut out = users.to_vec();
    out.sort_by(|a, b| {
        a.role
            .rank()
            .cmp(&b.role.rank())
            .then_with(|| compare_names(&a.name, &b.name))
    });
    out
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Highest-scoring player; the earliest entry wins ties. `None` for an empty slice.
pub fn top_player(players: &[Player]) -> Option<Player> {
    sort_by_number_field(players, |p| -p.score).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::{sort_by_number_field, sort_users, top_player};
    use crate::types::{Player, Role, User};

    #[test]
    fn sort_by_number_field_sorts_ascending_without_mutating_input() {
        let items = vec![("A", 20.0), ("B", 10.0), ("C", 15.0)];
        let out = sort_by_number_field(&items, |i| i.1);
        assert_eq!(out, vec![("B", 10.0), ("C", 15.0), ("A", 20.0)]);
        assert_eq!(items[0], ("A", 20.0));
    }

    #[test]
    fn sort_by_number_field_is_stable_for_equal_keys() {
        let items = vec![("x", 1.0), ("y", 0.0), ("z", 1.0), ("w", 0.0)];
        let out = sort_by_number_field(&items, |i| i.1);
        let names: Vec<&str> = out.iter().map(|i| i.0).collect();
        assert_eq!(names, vec!["y", "w", "x", "z"]);
    }

    #[test]
    fn sort_by_number_field_treats_signed_zeroes_as_equal() {
        let items = vec![("pos", 0.0), ("neg", -0.0)];
        let out = sort_by_number_field(&items, |i| i.1);
        assert_eq!(out[0].0, "pos");
    }

    #[test]
    fn sort_by_number_field_puts_nan_last() {
        let items = vec![f64::NAN, 3.0, -1.0];
        let out = sort_by_number_field(&items, |v| *v);
        assert_eq!(&out[..2], &[-1.0, 3.0]);
        assert!(out[2].is_nan());
    }

    #[test]
    fn sort_users_orders_by_role_then_name() {
        let users = vec![
            User::with_role("Mia", Role::Viewer),
            User::with_role("Leo", Role::Editor),
            User::with_role("bob", Role::Admin),
            User::with_role("Ana", Role::Admin),
        ];
        let out = sort_users(&users);
        let names: Vec<&str> = out.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "bob", "Leo", "Mia"]);
    }

    #[test]
    fn sort_users_breaks_case_only_ties_deterministically() {
        let users = vec![User::with_role("ana", Role::Editor), User::with_role("Ana", Role::Editor)];
        let out = sort_users(&users);
        assert_eq!(out[0].name, "Ana");
        assert_eq!(out[1].name, "ana");
    }

    #[test]
    fn top_player_picks_highest_score() {
        let players = vec![Player::new("Mia", 50.0), Player::new("Leo", 70.0), Player::new("Ana", 65.0)];
        assert_eq!(top_player(&players), Some(Player::new("Leo", 70.0)));
        assert_eq!(top_player(&[]), None);
    }

    #[test]
    fn top_player_first_entry_wins_ties() {
        let players = vec![Player::new("Mia", 70.0), Player::new("Leo", 70.0)];
        assert_eq!(top_player(&players).map(|p| p.name), Some("Mia".to_string()));
    }
}
