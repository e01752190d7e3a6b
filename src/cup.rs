use crate::common::{Int, Method};
use crate::error::IllegalValue;
use crate::roll::{null_tracer, record, SharedTracer, Toss, TossContext};
use crate::tree::{RollNode, Rollable, SupportsTracing};
use std::borrow::Cow;
use std::fmt;
use std::iter::FromIterator;

/// A collection of rollables summed together.
///
/// Only valid rollables are ever stored: adding an empty cup, or a cup made of
/// empty cups, has no effect.
#[derive(Clone)]
pub struct Cup {
    items: Vec<RollNode>,
    tracer: SharedTracer,
}

impl Cup {
    const KIND: &'static str = "Cup";

    pub fn new(items: impl IntoIterator<Item = RollNode>) -> Self {
        Self {
            items: items.into_iter().filter(RollNode::is_valid).collect(),
            tracer: null_tracer(),
        }
    }

    /// A cup holding `quantity` copies of `template`.
    pub fn from_rollable(
        template: impl Into<RollNode>,
        quantity: Int,
    ) -> Result<Self, IllegalValue> {
        if quantity < 1 {
            return Err(IllegalValue(quantity));
        }
        let template = template.into();
        if !template.is_valid() {
            return Ok(Self::default());
        }
        let count = usize::try_from(quantity).map_err(|_| IllegalValue(quantity))?;
        Ok(Self::new(std::iter::repeat(template).take(count)))
    }

    /// A cup with the valid `rollables` appended.
    ///
    /// When nothing valid is added, `self` is returned borrowed.
    pub fn with_added_rollable<I>(&self, rollables: I) -> Cow<'_, Self>
    where
        I: IntoIterator,
        I::Item: Into<RollNode>,
    {
        let added: Vec<RollNode> = rollables
            .into_iter()
            .map(Into::into)
            .filter(RollNode::is_valid)
            .collect();
        if added.is_empty() {
            return Cow::Borrowed(self);
        }
        let mut cup = self.clone();
        cup.items.extend(added);
        Cow::Owned(cup)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RollNode> {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, RollNode> {
        self.items.iter_mut()
    }

    fn decorate(&self, method: Method, evaluate: impl Fn(&RollNode) -> Toss) -> Toss {
        if self.is_empty() {
            return Toss::new(0, "0", TossContext::new(Self::KIND, self.notation(), method));
        }
        let values: Vec<Int> = self.items.iter().map(|item| evaluate(item).value()).collect();
        let sum = values.iter().fold(0, |sum: Int, &value| sum.saturating_add(value));
        let operation = values
            .iter()
            .map(|&value| {
                if value < 0 {
                    format!("({})", value)
                } else {
                    value.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" + ");
        record(&self.tracer, Self::KIND, self.notation(), method, sum, operation)
    }
}

impl Rollable for Cup {
    fn roll(&self) -> Toss {
        self.decorate(Method::Roll, |item| item.roll())
    }

    fn minimum(&self) -> Toss {
        self.decorate(Method::Minimum, |item| item.minimum())
    }

    fn maximum(&self) -> Toss {
        self.decorate(Method::Maximum, |item| item.maximum())
    }

    /// Members joined with `+`; a run of identical dice is written once behind its
    /// count, so four `D10` read `4D10`.
    fn notation(&self) -> String {
        if self.is_empty() {
            return "0".to_owned();
        }

        let mut parts = Vec::new();
        let mut run: Option<(String, usize)> = None;
        for item in &self.items {
            let notation = item.notation();
            if let Some((die, count)) = run.as_mut() {
                if item.is_die() && *die == notation {
                    *count += 1;
                    continue;
                }
            }
            if let Some(run) = run.take() {
                parts.push(fmt_run(run));
            }
            if item.is_die() {
                run = Some((notation, 1));
            } else {
                parts.push(notation);
            }
        }
        if let Some(run) = run {
            parts.push(fmt_run(run));
        }
        parts.join("+")
    }
}

fn fmt_run((die, count): (String, usize)) -> String {
    if count > 1 {
        format!("{}{}", count, die)
    } else {
        die
    }
}

impl SupportsTracing for Cup {
    fn set_tracer(&mut self, tracer: SharedTracer) {
        self.tracer = tracer;
    }

    fn tracer(&self) -> &SharedTracer {
        &self.tracer
    }
}

impl Default for Cup {
    fn default() -> Self {
        Self::new([])
    }
}

impl FromIterator<RollNode> for Cup {
    fn from_iter<T: IntoIterator<Item = RollNode>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Cup {
    type Item = &'a RollNode;
    type IntoIter = std::slice::Iter<'a, RollNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for Cup {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl fmt::Debug for Cup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cup")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Cup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{CustomDie, FudgeDie, PercentileDie, SidedDie};
    use crate::roll::MemoryTracer;
    use crate::test_utils::step_roller;
    use std::rc::Rc;

    fn sided(sides: Int) -> RollNode {
        SidedDie::new(sides).unwrap().into()
    }

    #[test]
    fn test_with_rollable() {
        let cup = Cup::default();
        let alt = cup.with_added_rollable([
            RollNode::from(FudgeDie::new()),
            CustomDie::new([-1, 1, -1]).unwrap().into(),
        ]);
        assert!(matches!(alt, Cow::Owned(_)));
        assert_ne!(&cup, alt.as_ref());
        assert_eq!(alt.len(), 2);
        assert!(cup.is_empty());
    }

    #[test]
    fn test_with_rollable_returns_same_instance() {
        let cup = Cup::new([FudgeDie::new().into()]);
        let alt = cup.with_added_rollable([Cup::default()]);
        assert!(matches!(alt, Cow::Borrowed(c) if std::ptr::eq(c, &cup)));

        let nested = Cup::new([Cup::default().into(), Cup::default().into()]);
        let alt = cup.with_added_rollable([nested]);
        assert!(matches!(alt, Cow::Borrowed(_)));
    }

    #[test]
    fn test_roll() {
        let cup = Cup::new([
            Cup::from_rollable(sided(10), 4).unwrap().into(),
            Cup::from_rollable(sided(4), 2).unwrap().into(),
        ]);
        assert!(!cup.is_empty());
        assert_eq!(cup.len(), 2);
        assert_eq!(cup.minimum().value(), 6);
        assert_eq!(cup.maximum().value(), 48);
        assert_eq!(cup.notation(), "4D10+2D4");
        for _ in 0..20 {
            let x = cup.roll().value();
            assert!((6..=48).contains(&x));
        }
    }

    #[test]
    fn test_from_rollable() {
        let templates: Vec<(Int, RollNode)> = vec![
            (2, sided(6)),
            (3, FudgeDie::new().into()),
            (4, PercentileDie::new().into()),
            (5, CustomDie::new([1, 2, 2, 3, 5]).unwrap().into()),
        ];
        for (quantity, template) in templates {
            let cup = Cup::from_rollable(template.clone(), quantity).unwrap();
            assert_eq!(cup.len() as Int, quantity);
            assert!(cup.iter().all(|item| *item == template));
        }
    }

    #[test]
    fn test_from_rollable_rejects_quantity() {
        assert_eq!(
            Cup::from_rollable(FudgeDie::new(), 0).unwrap_err(),
            IllegalValue(0)
        );
        assert_eq!(
            Cup::from_rollable(FudgeDie::new(), -2).unwrap_err(),
            IllegalValue(-2)
        );
    }

    #[test]
    fn test_from_rollable_of_empty_cup() {
        let cup = Cup::from_rollable(Cup::default(), 12).unwrap();
        assert_eq!(cup.len(), 0);
        let alt = cup.with_added_rollable([Cup::default()]);
        assert!(matches!(alt, Cow::Borrowed(_)));
    }

    #[test]
    fn test_empty_cup() {
        let memory = Rc::new(MemoryTracer::new());
        let mut cup = Cup::default();
        cup.set_tracer(memory.clone());
        assert_eq!(cup.notation(), "0");
        assert_eq!(cup.roll().value(), 0);
        assert_eq!(cup.minimum().value(), 0);
        assert_eq!(cup.maximum().value(), 0);
        assert!(memory.is_empty());
    }

    #[test]
    fn test_tracer() {
        let memory = Rc::new(MemoryTracer::new());
        let die = CustomDie::new([2, -3, -5]).unwrap();
        let mut cup = Cup::from_rollable(die, 12).unwrap();
        cup.set_tracer(memory.clone());
        assert!(memory.is_empty());
        cup.roll();
        assert!(!memory.is_empty());
        cup.maximum();
        cup.minimum();
        assert_eq!(memory.len(), 3);
        assert_eq!(cup.maximum().value(), 24);
        assert_eq!(cup.minimum().value(), -60);
    }

    #[test]
    fn test_trace_operation() {
        let memory = Rc::new(MemoryTracer::new());
        let roller = step_roller(1, 1);
        let mut cup = Cup::new([
            SidedDie::with_roller(6, roller.clone()).unwrap().into(),
            CustomDie::with_roller([-4, -2], roller).unwrap().into(),
        ]);
        cup.set_tracer(memory.clone());
        // the d6 draws 1, the custom die draws index (2 - 1)
        assert_eq!(cup.roll().value(), -1);
        let toss = &memory.tosses()[0];
        assert_eq!(toss.operation(), "1 + (-2)");
        assert_eq!(toss.context().to_string(), "Cup::roll");
        assert_eq!(toss.context().source(), "D6+D[-4,-2]");
    }

    #[test]
    fn test_five_four_sided_dice() {
        let group = Cup::from_rollable(sided(4), 5).unwrap();
        assert_eq!(group.len(), 5);
        for die in &group {
            assert_eq!(*die, sided(4));
        }
        for _ in 0..5 {
            let x = group.roll().value();
            assert!(x >= group.minimum().value());
            assert!(x <= group.maximum().value());
        }
    }

    #[test]
    fn test_notation_groups_runs() {
        let cup = Cup::new([sided(6), sided(6), sided(4), sided(6)]);
        assert_eq!(cup.notation(), "2D6+D4+D6");
        let cup = Cup::new([
            FudgeDie::new().into(),
            FudgeDie::new().into(),
            FudgeDie::new().into(),
        ]);
        assert_eq!(cup.notation(), "3DF");
        let cup = Cup::new([Cup::from_rollable(sided(6), 2).unwrap().into(), sided(6)]);
        assert_eq!(cup.notation(), "2D6+D6");
    }
}
