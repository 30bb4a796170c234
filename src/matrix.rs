use glam::Vec3;

/// A 4×4 transform stored as four rows of four columns, row-major in memory.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix {
    pub rows: [[f32; 4]; 4],
}

/// A matrix serialized to 16 floats with each column contiguous, the layout
/// uniform-upload calls expect.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FlatMatrix {
    pub v: [f32; 16],
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Matrix { rows }
    }

    /// Rebuild a matrix from its column-major serialization. Inverse of
    /// [`Matrix::flatten`]; bit-exact for finite values.
    pub fn from_flat(flat: FlatMatrix) -> Self {
        let mut rows = [[0.0; 4]; 4];
        for row in 0..4 {
            for col in 0..4 {
                rows[row][col] = flat.v[col * 4 + row];
            }
        }
        Matrix { rows }
    }

    /// Serialize column-major: output index `col * 4 + row` receives
    /// `rows[row][col]`. Total over all inputs; NaN and Inf pass through.
    pub fn flatten(&self) -> FlatMatrix {
        let mut v = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                v[col * 4 + row] = self.rows[row][col];
            }
        }
        FlatMatrix { v }
    }

    /// Apply the transform to a point with an implied `w = 1`, treating the
    /// matrix as affine (the bottom row is not used, no perspective divide).
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let r = &self.rows;
        Vec3::new(
            r[0][0] * p.x + r[0][1] * p.y + r[0][2] * p.z + r[0][3],
            r[1][0] * p.x + r[1][1] * p.y + r[1][2] * p.z + r[1][3],
            r[2][0] * p.x + r[2][1] * p.y + r[2][2] * p.z + r[2][3],
        )
    }
}

impl FlatMatrix {
    pub fn as_slice(&self) -> &[f32; 16] {
        &self.v
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.v.as_ptr()
    }
}

impl From<Matrix> for glam::Mat4 {
    fn from(m: Matrix) -> Self {
        glam::Mat4::from_cols_array(&m.flatten().v)
    }
}

impl From<glam::Mat4> for Matrix {
    fn from(m: glam::Mat4) -> Self {
        Matrix::from_flat(FlatMatrix {
            v: m.to_cols_array(),
        })
    }
}

impl From<Matrix> for mint::RowMatrix4<f32> {
    fn from(m: Matrix) -> Self {
        m.rows.into()
    }
}

impl From<mint::RowMatrix4<f32>> for Matrix {
    fn from(m: mint::RowMatrix4<f32>) -> Self {
        Matrix { rows: m.into() }
    }
}
