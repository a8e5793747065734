use std::ops::Range;

use crate::units::UnitTable;
use crate::{Error, Result};

/// Cuts a full duration pattern down to a unit range.
///
/// Patterns list every unit token largest-first with separators in between,
/// e.g. `hh:mm:ss.SS`. Tokens are expected in that left-to-right order for
/// every locale, including right-to-left scripts.
#[derive(Debug, Clone, Copy)]
pub struct PatternTrimmer<'t> {
    table: &'t UnitTable,
}

/// A unit token found in a trimmed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternField {
    pub unit: String,
    /// Byte range of the token within [`TrimmedPattern::text`].
    pub span: Range<usize>,
}

/// The trimmed part of a pattern and where each unit's token sits in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimmedPattern<'p> {
    pub text: &'p str,
    /// Located tokens, in pattern order.
    pub fields: Vec<PatternField>,
}

impl TrimmedPattern<'_> {
    /// Replaces every located token with `field(unit)`, leaving separators as written.
    pub fn fill<F>(&self, mut field: F) -> Result<String>
    where
        F: FnMut(&str) -> Result<String>,
    {
        let mut out = String::with_capacity(self.text.len());
        let mut cursor = 0;
        for f in &self.fields {
            out.push_str(&self.text[cursor..f.span.start]);
            out.push_str(&field(&f.unit)?);
            cursor = f.span.end;
        }
        out.push_str(&self.text[cursor..]);
        Ok(out)
    }
}

impl Default for PatternTrimmer<'static> {
    fn default() -> Self {
        Self::new(UnitTable::standard())
    }
}

impl<'t> PatternTrimmer<'t> {
    pub fn new(table: &'t UnitTable) -> Self {
        Self { table }
    }

    /// Returns the part of `pattern` from the first `max_unit` token through
    /// the `min_unit` token that follows it.
    ///
    /// ```rust
    /// use unitfmt::duration::PatternTrimmer;
    ///
    /// let trimmer = PatternTrimmer::default();
    /// assert_eq!(trimmer.trim("hh:mm:ss.SS", "minute", "second").unwrap(), "mm:ss");
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownUnit`] if a unit has no token or its token is missing from `pattern`
    /// - [`Error::InvalidRange`] if `max_unit` is smaller than `min_unit`
    pub fn trim<'p>(&self, pattern: &'p str, max_unit: &str, min_unit: &str) -> Result<&'p str> {
        self.locate(pattern, max_unit, min_unit).map(|trimmed| trimmed.text)
    }

    /// Trims `pattern` like [`trim`](Self::trim) and records the span of each
    /// unit token in the range.
    ///
    /// Tokens are searched in unit order, each one after the end of the
    /// previous match, so separator text that happens to contain a token is
    /// never mistaken for it. A token between the max and min units that is
    /// absent from the pattern is skipped.
    ///
    /// ```rust
    /// use unitfmt::duration::PatternTrimmer;
    ///
    /// let trimmed = PatternTrimmer::default().locate("hh uss mm ss", "hour", "second").unwrap();
    /// let spans: Vec<_> = trimmed.fields.iter().map(|f| f.span.clone()).collect();
    /// assert_eq!(spans, [0..2, 7..9, 10..12]);
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`trim`](Self::trim).
    pub fn locate<'p>(
        &self,
        pattern: &'p str,
        max_unit: &str,
        min_unit: &str,
    ) -> Result<TrimmedPattern<'p>> {
        let range = self.table.time_range(max_unit, min_unit)?;
        let last = range.len() - 1;

        let mut found: Vec<PatternField> = Vec::with_capacity(range.len());
        for (i, unit) in range.iter().enumerate() {
            let token = unit
                .token
                .as_deref()
                .ok_or_else(|| Error::UnknownUnit(unit.name.clone()))?;
            let cursor = found.last().map_or(0, |f| f.span.end);
            match pattern[cursor..].find(token) {
                Some(offset) => {
                    let start = cursor + offset;
                    found.push(PatternField {
                        unit: unit.name.clone(),
                        span: start..start + token.len(),
                    });
                }
                None if i == 0 || i == last => {
                    return Err(Error::UnknownUnit(token.to_string()));
                }
                None => {}
            }
        }

        let start = found[0].span.start;
        let end = found[found.len() - 1].span.end;
        for field in &mut found {
            field.span = field.span.start - start..field.span.end - start;
        }
        Ok(TrimmedPattern {
            text: &pattern[start..end],
            fields: found,
        })
    }
}
