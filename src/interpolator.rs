use ndarray::ArrayView2;

pub(crate) struct Interpolator;

impl Interpolator {
    /// Largest output size that fits inside `viewport` while preserving
    /// the source aspect ratio. `source` is (rows, columns).
    pub(crate) fn fit_dimensions(source: (usize, usize), viewport: (u32, u32)) -> (u32, u32) {
        let (rows, cols) = source;
        let (max_width, max_height) = viewport;

        let scale = (max_width as f32 / cols as f32).min(max_height as f32 / rows as f32);
        let width = ((cols as f32 * scale).round() as u32).max(1);
        let height = ((rows as f32 * scale).round() as u32).max(1);

        (width, height)
    }

    #[inline]
    pub(crate) fn bilinear_interpolate(slice: &ArrayView2<f32>, y: f32, x: f32) -> f32 {
        let (height, width) = slice.dim();

        let y0 = y.floor() as usize;
        let x0 = x.floor() as usize;
        let y1 = (y0 + 1).min(height - 1);
        let x1 = (x0 + 1).min(width - 1);

        let dy = y - y0 as f32;
        let dx = x - x0 as f32;
        let one_minus_dx = 1.0 - dx;
        let one_minus_dy = 1.0 - dy;

        let v00 = slice[[y0, x0]];
        let v01 = slice[[y0, x1]];
        let v10 = slice[[y1, x0]];
        let v11 = slice[[y1, x1]];

        let v0 = v00.mul_add(one_minus_dx, v01 * dx);
        let v1 = v10.mul_add(one_minus_dx, v11 * dx);

        v0.mul_add(one_minus_dy, v1 * dy)
    }
}
