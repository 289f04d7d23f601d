//! Conversion of finished chunks into Arrow arrays.

use std::sync::Arc;

use arrow_array::{
    Array, ArrayRef, BooleanArray, Float64Array, Int64Array, LargeBinaryArray, LargeListArray,
    StructArray, UnionArray, new_null_array,
};
use arrow_buffer::{Buffer, OffsetBuffer, ScalarBuffer as ArrowScalarBuffer};
use arrow_schema::{DataType, Field, Fields, UnionFields};

use crate::{
    BuildError, IndexType, MASKED,
    bytes::ByteStringLeaf,
    chunk::Chunk,
    list::ListBuilder,
    nullable::NullableWrapper,
    scalar::{ScalarBuffer, ScalarData},
    sequence::PartitionedSequence,
    union::UnionBuilder,
};

/// Struct fields used for complex128 values.
fn complex_fields() -> Fields {
    Fields::from(vec![
        Field::new("real", DataType::Float64, false),
        Field::new("imag", DataType::Float64, false),
    ])
}

/// Offsets for packed spans: the first start followed by every stop.
fn packed_offsets(starts: &[IndexType], stops: &[IndexType]) -> OffsetBuffer<i64> {
    let first = starts.first().copied().unwrap_or(0);
    OffsetBuffer::new(ArrowScalarBuffer::from_iter(
        std::iter::once(first).chain(stops.iter().copied()),
    ))
}

impl ScalarBuffer {
    /// Convert to the matching Arrow primitive (or `Struct{real, imag}` for complex128) array.
    #[must_use]
    pub fn to_arrow(&self) -> ArrayRef {
        match self.data() {
            ScalarData::Bool(v) => Arc::new(BooleanArray::from(v.clone())),
            ScalarData::Int64(v) => Arc::new(Int64Array::from(v.clone())),
            ScalarData::Float64(v) => Arc::new(Float64Array::from(v.clone())),
            ScalarData::Complex128(v) => {
                let re: ArrayRef = Arc::new(v.iter().map(|c| c.re).collect::<Float64Array>());
                let im: ArrayRef = Arc::new(v.iter().map(|c| c.im).collect::<Float64Array>());
                Arc::new(StructArray::new(complex_fields(), vec![re, im], None))
            }
        }
    }
}

impl ByteStringLeaf {
    /// Convert to a `LargeBinary` array sharing the same offsets layout.
    ///
    /// # Errors
    /// Returns `Export` if Arrow rejects the buffers.
    pub fn to_arrow(&self) -> Result<ArrayRef, BuildError> {
        let offsets = packed_offsets(self.starts(), self.stops());
        let values = Buffer::from_vec(self.content().to_vec());
        Ok(Arc::new(LargeBinaryArray::try_new(offsets, values, None)?))
    }
}

impl ListBuilder {
    /// Convert to a `LargeList` array over the concatenated inner sequence.
    ///
    /// # Errors
    /// Returns `Export` if the inner chunks disagree on their Arrow type.
    pub fn to_arrow(&self) -> Result<ArrayRef, BuildError> {
        let values = self.content().to_arrow()?;
        let item = Arc::new(Field::new("item", values.data_type().clone(), true));
        let offsets = packed_offsets(self.starts(), self.stops());
        Ok(Arc::new(LargeListArray::try_new(item, offsets, values, None)?))
    }
}

impl NullableWrapper {
    /// Convert to the content gathered through the index, masked slots null.
    ///
    /// Union content has no validity of its own, so nulls become slots of an extra
    /// `Null`-typed variant.
    ///
    /// # Errors
    /// Returns `Export` if Arrow rejects the gather or union buffers.
    pub fn to_arrow(&self) -> Result<ArrayRef, BuildError> {
        match self.content() {
            None => Ok(new_null_array(&DataType::Null, self.len())),
            Some(Chunk::Union(u)) => nullable_union(self, u),
            Some(content) => {
                let values = content.to_arrow()?;
                let indices: Int64Array = self
                    .index()
                    .iter()
                    .map(|&i| (i != MASKED).then_some(i))
                    .collect();
                Ok(arrow_select::take::take(values.as_ref(), &indices, None)?)
            }
        }
    }
}

impl UnionBuilder {
    /// Convert to a dense `UnionArray` with one child per variant.
    ///
    /// # Errors
    /// Returns `Export` if a variant fails to convert or Arrow rejects the buffers.
    pub fn to_arrow(&self) -> Result<ArrayRef, BuildError> {
        let offsets = self
            .index()
            .iter()
            .map(|&i| i32::try_from(i).map_err(BuildError::export))
            .collect::<Result<Vec<_>, _>>()?;
        dense_union(
            self.contents(),
            self.tags().to_vec(),
            offsets,
            None,
        )
    }
}

fn nullable_union(w: &NullableWrapper, u: &UnionBuilder) -> Result<ArrayRef, BuildError> {
    let null_tag = u.contents().len() as i8;
    let mut type_ids = Vec::with_capacity(w.len());
    let mut offsets = Vec::with_capacity(w.len());
    let mut nulls = 0_i32;
    for &pos in w.index() {
        if pos == MASKED {
            type_ids.push(null_tag);
            offsets.push(nulls);
            nulls += 1;
            continue;
        }
        let pos = usize::try_from(pos).map_err(BuildError::export)?;
        type_ids.push(u.tags()[pos]);
        offsets.push(i32::try_from(u.index()[pos]).map_err(BuildError::export)?);
    }
    dense_union(u.contents(), type_ids, offsets, Some(nulls as usize))
}

fn dense_union(
    contents: &[Chunk],
    type_ids: Vec<i8>,
    offsets: Vec<i32>,
    null_variant: Option<usize>,
) -> Result<ArrayRef, BuildError> {
    let mut children = contents
        .iter()
        .map(Chunk::to_arrow)
        .collect::<Result<Vec<_>, _>>()?;
    let mut fields: Vec<(i8, Arc<Field>)> = contents
        .iter()
        .zip(&children)
        .enumerate()
        .map(|(tag, (chunk, child))| {
            (
                tag as i8,
                Arc::new(Field::new(chunk.kind_name(), child.data_type().clone(), true)),
            )
        })
        .collect();
    if let Some(len) = null_variant {
        fields.push((
            children.len() as i8,
            Arc::new(Field::new("null", DataType::Null, true)),
        ));
        children.push(new_null_array(&DataType::Null, len));
    }
    let fields: UnionFields = fields.into_iter().collect();
    let type_ids: ArrowScalarBuffer<i8> = type_ids.into_iter().collect();
    let offsets: ArrowScalarBuffer<i32> = offsets.into_iter().collect();
    let array = UnionArray::try_new(fields, type_ids, Some(offsets), children)?;
    Ok(Arc::new(array))
}

impl Chunk {
    /// Convert this chunk into an Arrow array of the same logical length.
    ///
    /// # Errors
    /// Returns `Export` when Arrow rejects the produced buffers or nested chunks disagree on
    /// their Arrow type.
    pub fn to_arrow(&self) -> Result<ArrayRef, BuildError> {
        match self {
            Chunk::Scalar(b) => Ok(b.to_arrow()),
            Chunk::Bytes(b) => b.to_arrow(),
            Chunk::List(b) => b.to_arrow(),
            Chunk::Nullable(b) => b.to_arrow(),
            Chunk::Union(b) => b.to_arrow(),
        }
    }
}

impl PartitionedSequence {
    /// Convert every chunk to an Arrow array, one array per chunk.
    ///
    /// # Errors
    /// Propagates the first chunk conversion error.
    pub fn to_arrow_chunks(&self) -> Result<Vec<ArrayRef>, BuildError> {
        self.chunks().iter().map(Chunk::to_arrow).collect()
    }

    /// Convert to a single Arrow array by concatenating the per-chunk arrays.
    ///
    /// An empty sequence converts to an empty `Null` array. Chunks that hold only nulls have no
    /// type of their own and take the type of the first typed chunk.
    ///
    /// # Errors
    /// Returns `Export` when typed chunks convert to different Arrow types.
    pub fn to_arrow(&self) -> Result<ArrayRef, BuildError> {
        let mut arrays = self.to_arrow_chunks()?;
        if let [one] = arrays.as_slice() {
            return Ok(Arc::clone(one));
        }
        let Some(common) = arrays
            .iter()
            .map(|a| a.data_type())
            .find(|t| **t != DataType::Null)
            .cloned()
        else {
            let len = arrays.iter().map(|a| a.len()).sum();
            return Ok(new_null_array(&DataType::Null, len));
        };
        if let Some(other) = arrays
            .iter()
            .find(|a| *a.data_type() != DataType::Null && *a.data_type() != common)
        {
            return Err(BuildError::export(format!(
                "chunks disagree on type: {:?} vs {:?}",
                common,
                other.data_type()
            )));
        }
        for a in &mut arrays {
            if *a.data_type() == DataType::Null {
                *a = new_null_array(&common, a.len());
            }
        }
        let refs: Vec<&dyn Array> = arrays.iter().map(AsRef::as_ref).collect();
        Ok(arrow_select::concat::concat(&refs)?)
    }
}
