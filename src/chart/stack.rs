//! Stacker for layered-area rendering.

use crate::domain::{Datum, Series};
use crate::error::DepthError;

/// Cumulatively sums aligned series, series by series.
///
/// Series `j` of the result carries, at index `i`, the sum of the y-values
/// of input series `0..=j` at index `i`; x-values are taken from series `j`
/// unchanged.
///
/// # Errors
///
/// Returns [`DepthError::SeriesLengthMismatch`] if any series differs in
/// length from the first one.
///
/// # Examples
///
/// ```
/// use muffin_depth::chart::stack;
/// use muffin_depth::domain::Datum;
///
/// let a = vec![Datum::new(0.0, 1.0), Datum::new(1.0, 2.0)];
/// let b = vec![Datum::new(0.0, 10.0), Datum::new(1.0, 20.0)];
/// let stacked = stack(&[a, b]).expect("aligned");
/// assert_eq!(stacked[1], vec![Datum::new(0.0, 11.0), Datum::new(1.0, 22.0)]);
/// ```
pub fn stack(series: &[Series]) -> crate::error::Result<Vec<Series>> {
    let Some(first) = series.first() else {
        return Ok(Vec::new());
    };
    let expected = first.len();
    if let Some((index, offending)) = series
        .iter()
        .enumerate()
        .find(|(_, s)| s.len() != expected)
    {
        return Err(DepthError::SeriesLengthMismatch {
            expected,
            found: offending.len(),
            series: index,
        });
    }

    let mut totals = vec![0.0_f64; expected];
    let stacked: Vec<Series> = series
        .iter()
        .map(|points| {
            points
                .iter()
                .zip(totals.iter_mut())
                .map(|(datum, total)| {
                    *total += datum.y;
                    Datum::new(datum.x, *total)
                })
                .collect::<Series>()
        })
        .collect();
    Ok(stacked)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn series(ys: &[f64]) -> Series {
        ys.iter()
            .enumerate()
            .map(|(i, &y)| Datum::new(i as f64, y))
            .collect()
    }

    #[test]
    fn empty_list() {
        let Ok(stacked) = stack(&[]) else {
            panic!("expected Ok");
        };
        assert!(stacked.is_empty());
    }

    #[test]
    fn single_series_is_a_no_op() {
        let s = series(&[1.0, 5.0, 2.0]);
        let Ok(stacked) = stack(&[s.clone()]) else {
            panic!("expected Ok");
        };
        assert_eq!(stacked, vec![s]);
    }

    #[test]
    fn cumulative_sums() {
        let Ok(stacked) = stack(&[
            series(&[1.0, 2.0]),
            series(&[10.0, 20.0]),
            series(&[100.0, 200.0]),
        ]) else {
            panic!("expected Ok");
        };
        let ys: Vec<Vec<f64>> = stacked
            .iter()
            .map(|s| s.iter().map(|d| d.y).collect())
            .collect();
        assert_eq!(
            ys,
            vec![vec![1.0, 2.0], vec![11.0, 22.0], vec![111.0, 222.0]]
        );
    }

    #[test]
    fn x_values_pass_through() {
        let a = vec![Datum::new(3.0, 1.0)];
        let b = vec![Datum::new(3.0, 2.0)];
        let Ok(stacked) = stack(&[a, b]) else {
            panic!("expected Ok");
        };
        assert_eq!(stacked[1], vec![Datum::new(3.0, 3.0)]);
    }

    #[test]
    fn empty_series_stack_to_empty() {
        let Ok(stacked) = stack(&[vec![], vec![]]) else {
            panic!("expected Ok");
        };
        assert_eq!(stacked, vec![Vec::<Datum>::new(), Vec::new()]);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert_eq!(
            stack(&[series(&[1.0, 2.0]), series(&[1.0, 2.0]), series(&[1.0])]),
            Err(DepthError::SeriesLengthMismatch {
                expected: 2,
                found: 1,
                series: 2,
            })
        );
    }
}
