use super::FixedArray;
use crate::Value;


impl FixedArray<Value> {

    /// Expands nested [`Value::Array`]s into a single-level array.
    ///
    /// `depth` limits how many levels are expanded: `Some(0)` expands
    /// nothing, `Some(1)` expands only arrays held directly by `self`, and
    /// `None` expands all levels. Scalars and empty slots are kept as-is.
    ///
    /// Arrays are owned values, so a nested structure can never contain
    /// itself and the recursion always terminates.
    ///
    /// # Examples
    /// ```
    /// use fixedarr::values;
    ///
    /// let nested = values![1, values![2, values![3, 4]], 5];
    ///
    /// assert_eq!(nested.flatten(None), values![1, 2, 3, 4, 5]);
    /// assert_eq!(nested.flatten(Some(1)), values![1, 2, values![3, 4], 5]);
    /// assert_eq!(nested.flatten(Some(0)), nested);
    /// ```
    pub fn flatten(&self, depth: Option<usize>) -> FixedArray<Value> {
        let mut out = Vec::new();
        flatten_into(self, depth, &mut out);
        FixedArray::from_slots(out)
    }
}

fn flatten_into(items: &FixedArray<Value>, depth: Option<usize>, out: &mut Vec<Option<Value>>) {
    for slot in items.iter() {
        match (slot, depth) {
            (Some(Value::Array(nested)), None) => flatten_into(nested, None, out),
            (Some(Value::Array(nested)), Some(level)) if level > 0 => {
                flatten_into(nested, Some(level - 1), out)
            }
            _ => out.push(slot.cloned()),
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::{FixedArray, Value, values};

    #[test]
    fn flattens_one_level() {
        assert_eq!(values![1, values![2, 3], 4].flatten(None), values![1, 2, 3, 4]);
    }

    #[test]
    fn flattens_deeply() {
        let nested = values![1, values![2, values![3, values![4]]], 5];
        assert_eq!(nested.flatten(None), values![1, 2, 3, 4, 5]);
    }

    #[test]
    fn respects_depth() {
        let nested = values![1, values![2, values![3, 4]], 5];
        assert_eq!(nested.flatten(Some(1)), values![1, 2, values![3, 4], 5]);
        assert_eq!(nested.flatten(Some(2)), values![1, 2, 3, 4, 5]);
        assert_eq!(nested.flatten(Some(0)), nested);
    }

    #[test]
    fn keeps_scalars_and_gaps() {
        let mut inner = values![true, Value::Null];
        inner.push_slot(None);
        let nested = values![1, "foo", inner, 5.5];

        let mut expected = values![1, "foo", true, Value::Null];
        expected.push_slot(None).push(Value::from(5.5));
        assert_eq!(nested.flatten(None), expected);
    }

    #[test]
    fn empty_inputs() {
        assert!(FixedArray::<Value>::new().flatten(None).is_empty());
        assert_eq!(values![values![], 1].flatten(None), values![1]);
    }
}
