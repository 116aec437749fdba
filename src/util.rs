macro_rules! create_nary_combination_iter {
    ($name:ident, $ctor:ident, $comp:ty, $arr:ty, $num:expr) => {
        /// Iterator over the cartesian product `0..dimensions[0] × ... ×
        /// 0..dimensions[N-1]` in lexicographic order, last index fastest.
        #[derive(Debug, Clone)]
        pub struct $name {
            pub dimensions: $arr,
            pub next_value: $arr,
        }

        impl Iterator for $name {
            type Item = $arr;

            fn size_hint(&self) -> (usize, Option<usize>) {
                if self.dimensions.iter().any(|dim| *dim == 0) {
                    return (0, Some(0));
                }

                let size = self.dimensions.iter().copied().product::<$comp>() as usize;
                let consumed = self
                    .dimensions
                    .iter()
                    .zip(self.next_value.iter())
                    .fold(0, |rank, (dim, value)| rank * dim + value);

                (size - consumed, Some(size - consumed))
            }

            fn next(&mut self) -> Option<Self::Item> {
                if self.dimensions.iter().any(|dim| *dim == 0) {
                    None
                } else {
                    let next_value = self.next_value;
                    let mut did_break = false;
                    for idx in (0..$num).rev() {
                        if self.next_value[idx] < self.dimensions[idx] - 1 {
                            for above_idx in (idx + 1)..$num {
                                self.next_value[above_idx] = 0;
                            }

                            self.next_value[idx] += 1;
                            did_break = true;
                            break;
                        }
                    }

                    if !did_break {
                        self.dimensions = [0; $num];
                    }

                    Some(next_value)
                }
            }
        }

        pub fn $ctor(dimensions: $arr) -> $name {
            $name {
                dimensions,
                next_value: [0; $num],
            }
        }
    };
}

create_nary_combination_iter!(
    TwoCombinationIter,
    two_combination_iter,
    usize,
    [usize; 2],
    2
);
