/// A circular arc over a chord lying on the axis of an edge frame.
///
/// Coordinates are `(along, out)` pairs in the frame of the edge: the chord spans
/// `[from, to]` along the edge, and the crown of the arc reaches `sagitta` units out of it
/// (into the boundary when negative).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Arc {
    pub(super) from: f64,
    pub(super) to: f64,
    pub(super) sagitta: f64,
}

impl Arc {
    /// Returns `segments + 1` evenly spaced points of the arc, both chord endpoints included.
    ///
    /// An arc with no width or no sagitta degenerates into its straight chord.
    pub(super) fn sample(&self, segments: usize) -> Vec<(f64, f64)> {
        let segments = segments.max(1);
        let half = (self.to - self.from) / 2.;
        let height = self.sagitta.abs();

        if half <= 0. || height == 0. || !half.is_finite() || !height.is_finite() {
            return vec![(self.from, 0.), (self.to.max(self.from), 0.)];
        }

        let middle = self.from + half;
        let sign = self.sagitta.signum();
        let radius = (half * half + height * height) / (2. * height);
        let center = height - radius;

        // Angles are measured from the out axis, so the crown is at zero.
        let first = (-half).atan2(radius - height);
        let step = -2. * first / segments as f64;

        (0..=segments)
            .map(|index| {
                if index == 0 {
                    return (self.from, 0.);
                }

                if index == segments {
                    return (self.to, 0.);
                }

                let angle = first + step * index as f64;
                (
                    middle + radius * angle.sin(),
                    sign * (center + radius * angle.cos()),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Arc;
    use crate::{IsClose, Tolerance};

    #[test]
    fn arc_sampling() {
        struct Test {
            name: &'static str,
            arc: Arc,
            segments: usize,
            want: Vec<(f64, f64)>,
        }

        let half = std::f64::consts::FRAC_1_SQRT_2 * 10.;

        vec![
            Test {
                name: "semicircle",
                arc: Arc {
                    from: 0.,
                    to: 20.,
                    sagitta: 10.,
                },
                segments: 4,
                want: vec![
                    (0., 0.),
                    (10. - half, half),
                    (10., 10.),
                    (10. + half, half),
                    (20., 0.),
                ],
            },
            Test {
                name: "inwards semicircle",
                arc: Arc {
                    from: 0.,
                    to: 20.,
                    sagitta: -10.,
                },
                segments: 2,
                want: vec![(0., 0.), (10., -10.), (20., 0.)],
            },
            Test {
                name: "shallow arc",
                arc: Arc {
                    from: 10.,
                    to: 18.,
                    sagitta: 2.,
                },
                segments: 2,
                want: vec![(10., 0.), (14., 2.), (18., 0.)],
            },
            Test {
                name: "flat arc",
                arc: Arc {
                    from: 10.,
                    to: 40.,
                    sagitta: 0.,
                },
                segments: 8,
                want: vec![(10., 0.), (40., 0.)],
            },
            Test {
                name: "arc with no width",
                arc: Arc {
                    from: 10.,
                    to: 10.,
                    sagitta: 3.,
                },
                segments: 8,
                want: vec![(10., 0.), (10., 0.)],
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = test.arc.sample(test.segments);
            let tolerance = Tolerance::new(0., 1e-9);

            assert_eq!(got.len(), test.want.len(), "{}: got {got:?}", test.name);
            got.iter().zip(&test.want).for_each(|(got, want)| {
                assert!(
                    got.0.is_close(&want.0, &tolerance) && got.1.is_close(&want.1, &tolerance),
                    "{}: got {got:?}, want {want:?}",
                    test.name
                );
            });
        });
    }

    #[test]
    fn arc_deeper_than_half_its_width() {
        let got = Arc {
            from: 0.,
            to: 10.,
            sagitta: 8.,
        }
        .sample(16);

        assert_eq!(got.len(), 17);
        assert!(got.iter().all(|(along, out)| along.is_finite() && out.is_finite()));
        assert!(got[8].1.is_close(&8., &Tolerance::new(0., 1e-9)));
    }
}
