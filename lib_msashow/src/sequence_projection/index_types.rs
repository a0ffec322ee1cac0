use strong_type::StrongType;

/// A column of the rendered sequence alignment.
///
/// This is the linear character coordinate: every emitted character of every
/// row lives at exactly one sequence column.
#[derive(StrongType)]
#[strong_type(conversion)]
pub struct SequenceColumn(usize);

/// A global block-position index.
///
/// This is the canonical structural coordinate: the 0-based count of block
/// columns across all blocks, in block order. Separator and insertion columns
/// of the sequence alignment have no structure column.
#[derive(StrongType)]
#[strong_type(conversion, addable)]
pub struct StructureColumn(usize);

macro_rules! index_type_ops {
    ($name:ty) => {
        impl std::ops::Add<usize> for $name {
            type Output = Self;

            fn add(self, other: usize) -> Self::Output {
                Self(self.0 + other)
            }
        }

        impl std::ops::AddAssign<usize> for $name {
            fn add_assign(&mut self, other: usize) {
                self.0 += other
            }
        }

        impl<'a> From<&'a $name> for usize {
            fn from(value: &'a $name) -> Self {
                value.0
            }
        }
    };
}

index_type_ops!(StructureColumn);
