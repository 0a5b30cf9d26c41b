//! Compatibility rule for pairing two matched modifiers.

use crate::matcher::MatchedModifier;

/// Returns whether `a` and `b` may appear together on one item.
///
/// A universal modifier pairs with anything. Two modifiers that are each
/// restricted to a damage type (any two types) never pair. Everything else
/// pairs. The rule is symmetric in its arguments.
pub fn can_combine(a: &MatchedModifier, b: &MatchedModifier) -> bool {
    if a.is_universal() || b.is_universal() {
        return true;
    }
    !(a.is_damage_restricted() && b.is_damage_restricted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ModifierRecord;

    fn matched(id: &str, text: &str) -> MatchedModifier {
        MatchedModifier::from_record(&ModifierRecord::new(id, id, text)).unwrap()
    }

    #[test]
    fn universal_pairs_with_anything() {
        let universal = matched("u", "+1 to Level of all Skill Gems");
        let fire = matched("f", "+1 to Level of all Fire Skill Gems");
        assert!(can_combine(&universal, &fire));
        assert!(can_combine(&fire, &universal));
    }

    #[test]
    fn two_damage_types_never_pair() {
        let fire = matched("f", "+1 to Level of all Fire Skill Gems");
        let cold = matched("c", "+1 to Level of all Cold Skill Gems");
        let fire_again = matched("f2", "+2 to Level of all Fire Skill Gems");
        assert!(!can_combine(&fire, &cold));
        assert!(!can_combine(&cold, &fire));
        assert!(!can_combine(&fire, &fire_again));
    }

    #[test]
    fn generic_categories_pair_freely() {
        let strength = matched("s", "+1 to Level of all Strength Skill Gems");
        let dexterity = matched("d", "+1 to Level of all Dexterity Skill Gems");
        let fire = matched("f", "+1 to Level of all Fire Skill Gems");
        let spell = matched("sp", "+1 to Level of all Spell Skill Gems");
        assert!(can_combine(&strength, &dexterity));
        assert!(can_combine(&fire, &spell));
    }

    #[test]
    fn symmetric_over_sample() {
        let all = [
            matched("u", "+1 to Level of all Skill Gems"),
            matched("f", "+1 to Level of all Fire Skill Gems"),
            matched("c", "+1 to Level of all Cold Skill Gems"),
            matched("sp", "+1 to Level of all Spell Skill Gems"),
            matched("fs", "+1 to Level of all Fire Spell Skill Gems"),
            matched("m", "+2 to Level of all Minion Skill Gems"),
        ];
        for a in &all {
            for b in &all {
                assert_eq!(can_combine(a, b), can_combine(b, a), "{} / {}", a.id, b.id);
            }
        }
    }
}
