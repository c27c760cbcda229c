use serde::Deserialize;
use serde::Serialize;

/// how per-feature planes are interleaved in the flat vector, so a
/// consumer can reshape it correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    Concatenated,
    Interleaved,
}

/// ordered dimension sizes plus the layout tag for one encoding.
/// declared once on the game [super::Spec] and never derived from state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    dims: Vec<usize>,
    layout: Layout,
}

impl Shape {
    pub fn new(dims: Vec<usize>, layout: Layout) -> Self {
        Self { dims, layout }
    }
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }
    pub fn layout(&self) -> Layout {
        self.layout
    }
    /// flat vector length: the product of all dimensions
    pub fn len(&self) -> usize {
        self.dims.iter().product()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// a flat fixed-length numeric encoding of what one player observes,
/// produced on demand by [super::State]. length always equals the
/// product of the declared shape dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tensor {
    data: Vec<f32>,
    shape: Shape,
}

impl Tensor {
    pub fn new(data: Vec<f32>, shape: Shape) -> Self {
        assert!(
            data.len() == shape.len(),
            "tensor length {} mismatches shape {:?}",
            data.len(),
            shape.dims()
        );
        Self { data, shape }
    }
    pub fn data(&self) -> &[f32] {
        &self.data
    }
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_length_is_product_of_dims() {
        let shape = Shape::new(vec![3, 4, 2], Layout::Concatenated);
        assert_eq!(shape.len(), 24);
    }

    #[test]
    #[should_panic]
    fn tensor_rejects_length_mismatch() {
        let shape = Shape::new(vec![2, 2], Layout::Interleaved);
        Tensor::new(vec![0.; 3], shape);
    }
}
