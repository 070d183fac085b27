//! FormSource - Modifiers from the current body form

use crate::source::ModifierSource;
use crate::stat_block::ModifierAccumulator;
use crate::types::Attribute;
use crate::world::ModifierQueries;

/// Body forms only adjust strength and dexterity
pub struct FormSource;

impl ModifierSource for FormSource {
    fn id(&self) -> &str {
        "form"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn apply(
        &self,
        attribute: Attribute,
        world: &dyn ModifierQueries,
        _innate_only: bool,
        acc: &mut ModifierAccumulator,
    ) {
        let form = world.current_form();
        let amount = match attribute {
            Attribute::Strength => form.str_mod,
            Attribute::Intelligence => 0,
            Attribute::Dexterity => form.dex_mod,
        };
        acc.add("form", amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeWorld;

    #[test]
    fn test_form_modifiers() {
        let mut world = FakeWorld::new();
        world.form.str_mod = 10;
        world.form.dex_mod = -5;

        let totals: Vec<i32> = Attribute::all()
            .iter()
            .map(|a| {
                let mut acc = ModifierAccumulator::new();
                FormSource.apply(*a, &world, false, &mut acc);
                acc.total()
            })
            .collect();
        assert_eq!(totals, vec![10, 0, -5]);
    }
}
