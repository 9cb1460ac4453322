use super::Either;
use crate::strategy::ErrorStrategy;
use core::fmt;
use core::hash::{Hash, Hasher};

impl<S, A> Clone for Either<S, A>
where
    S: ErrorStrategy + Clone,
    S::Error: Clone,
    A: Clone,
{
    fn clone(&self) -> Self {
        Self { ctx: self.ctx.clone(), repr: self.repr.clone() }
    }
}

impl<S, A> fmt::Debug for Either<S, A>
where
    S: ErrorStrategy,
    S::Error: fmt::Debug,
    A: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Ok(value) => f.debug_tuple("Success").field(value).finish(),
            Err(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<S, A> PartialEq for Either<S, A>
where
    S: ErrorStrategy,
    S::Error: PartialEq,
    A: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl<S, A> Eq for Either<S, A>
where
    S: ErrorStrategy,
    S::Error: Eq,
    A: Eq,
{
}

impl<S, A> Hash for Either<S, A>
where
    S: ErrorStrategy,
    S::Error: Hash,
    A: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.repr.hash(state);
    }
}

impl<S, A> From<Either<S, A>> for Result<A, S::Error>
where
    S: ErrorStrategy,
{
    #[inline]
    fn from(either: Either<S, A>) -> Self {
        either.into_result()
    }
}
