//! Small schema types used to drive the merge core from the outside.

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Map, Value};
use verdict::{
    merge_array, merge_array_async, merge_object_async, merge_object_sync, record_issue,
    IssueData, IssueKind, MaybeDeferred, ObjectEntries, ObjectPair, Outcome, PendingPair,
    SizeOrigin, StatusTracker, Strip, ValidationContext, Validator, ValueType,
};

pub type BoxedSchema = Box<dyn Validator<Output = Value>>;

/// Accepts strings.
pub struct StringSchema;

impl Validator for StringSchema {
    type Output = Value;

    fn validate<'a>(&'a self, ctx: ValidationContext) -> MaybeDeferred<'a, Value> {
        match ctx.data() {
            Value::String(_) => Outcome::ok(ctx.data().clone()).into(),
            _ => {
                record_issue(
                    &ctx,
                    IssueData::new(IssueKind::invalid_type(ValueType::String, ctx.parsed_type())),
                );
                Outcome::failed().into()
            }
        }
    }
}

/// Accepts numbers; coerces numeric strings with an issue.
pub struct NumberSchema;

impl Validator for NumberSchema {
    type Output = Value;

    fn validate<'a>(&'a self, ctx: ValidationContext) -> MaybeDeferred<'a, Value> {
        let coerced = match ctx.data() {
            Value::Number(_) => return Outcome::ok(ctx.data().clone()).into(),
            Value::String(s) => s.parse::<f64>().ok(),
            _ => None,
        };
        match coerced {
            Some(n) => {
                record_issue(
                    &ctx,
                    IssueData::new(IssueKind::custom()).with_message("coerced from string"),
                );
                Outcome::partial(json!(n)).into()
            }
            None => {
                record_issue(
                    &ctx,
                    IssueData::new(IssueKind::invalid_type(ValueType::Number, ctx.parsed_type())),
                );
                Outcome::failed().into()
            }
        }
    }
}

/// Runs `inner` after a delay when the run is asynchronous.
pub struct Delayed<S> {
    pub inner: S,
    pub delay: Duration,
}

impl<S> Delayed<S> {
    pub fn new(inner: S, millis: u64) -> Self {
        Self {
            inner,
            delay: Duration::from_millis(millis),
        }
    }
}

impl<S: Validator> Validator for Delayed<S> {
    type Output = S::Output;

    fn validate<'a>(&'a self, ctx: ValidationContext) -> MaybeDeferred<'a, S::Output> {
        if !ctx.is_async() {
            return self.inner.validate(ctx);
        }
        MaybeDeferred::deferred(async move {
            tokio::time::sleep(self.delay).await;
            self.inner.validate(ctx).resolve().await
        })
    }
}

struct Field {
    name: String,
    schema: BoxedSchema,
    optional: bool,
}

/// An object with declared fields.
///
/// Unknown keys are dropped, passed through, or reported in strict runs.
pub struct ObjectSchema {
    fields: Vec<Field>,
    passthrough: bool,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            passthrough: false,
        }
    }

    pub fn field(mut self, name: &str, schema: impl Validator<Output = Value> + 'static) -> Self {
        self.fields.push(Field {
            name: name.to_string(),
            schema: Box::new(schema),
            optional: false,
        });
        self
    }

    pub fn optional(mut self, name: &str, schema: impl Validator<Output = Value> + 'static) -> Self {
        self.fields.push(Field {
            name: name.to_string(),
            schema: Box::new(schema),
            optional: true,
        });
        self
    }

    pub fn passthrough(mut self) -> Self {
        self.passthrough = true;
        self
    }
}

impl Validator for ObjectSchema {
    type Output = Value;

    fn validate<'a>(&'a self, ctx: ValidationContext) -> MaybeDeferred<'a, Value> {
        let Some(obj) = ctx.data().as_object().cloned() else {
            record_issue(
                &ctx,
                IssueData::new(IssueKind::invalid_type(ValueType::Object, ctx.parsed_type())),
            );
            return Outcome::failed().into();
        };

        let mut tracker = StatusTracker::new();
        let mut pairs = Vec::new();
        for field in &self.fields {
            let value = match obj.get(&field.name) {
                Some(v) => field.schema.validate(ctx.child_key(&field.name, v.clone())).map(Some),
                None if field.optional => Outcome::ok(None).into(),
                None => field.schema.validate(ctx.child_absent(&field.name)).map(Some),
            };
            let mut pair = PendingPair::new(Outcome::ok(field.name.clone()).into(), value);
            if field.optional && ctx.is_strict() {
                pair = pair.always_set();
            }
            pairs.push(pair);
        }

        let unknown: Vec<String> = obj
            .keys()
            .filter(|k| !self.fields.iter().any(|f| &f.name == *k))
            .cloned()
            .collect();
        if ctx.is_strict() && !unknown.is_empty() {
            record_issue(&ctx, IssueData::new(IssueKind::UnrecognizedKeys { keys: unknown }));
            tracker.mark_dirty();
        } else if self.passthrough {
            for key in unknown {
                let value = obj.get(&key).cloned();
                pairs.push(PendingPair::new(
                    Outcome::ok(key).into(),
                    Outcome::ok(value).into(),
                ));
            }
        }

        if ctx.is_async() {
            return MaybeDeferred::deferred(async move {
                merge_object_async(&mut tracker, pairs).await.map(entries_to_value)
            });
        }

        let resolved = pairs
            .into_iter()
            .map(|pair| ObjectPair {
                key: pair.key.into_ready().expect("synchronous run"),
                value: pair.value.into_ready().expect("synchronous run"),
                always_set: pair.always_set,
            })
            .collect();
        merge_object_sync(&mut tracker, resolved)
            .map(entries_to_value)
            .into()
    }
}

/// A tuple of positional items followed by optional rest elements.
///
/// Failed rest elements are stripped as long as every positional item
/// survives.
pub struct TupleSchema {
    items: Vec<BoxedSchema>,
    rest: Option<BoxedSchema>,
}

impl TupleSchema {
    pub fn new(items: Vec<BoxedSchema>) -> Self {
        Self { items, rest: None }
    }

    pub fn rest(mut self, schema: impl Validator<Output = Value> + 'static) -> Self {
        self.rest = Some(Box::new(schema));
        self
    }
}

impl Validator for TupleSchema {
    type Output = Value;

    fn validate<'a>(&'a self, ctx: ValidationContext) -> MaybeDeferred<'a, Value> {
        let Some(arr) = ctx.data().as_array().cloned() else {
            record_issue(
                &ctx,
                IssueData::new(IssueKind::invalid_type(ValueType::Array, ctx.parsed_type())),
            );
            return Outcome::failed().into();
        };
        if arr.len() < self.items.len() || (self.rest.is_none() && arr.len() > self.items.len()) {
            let kind = if arr.len() < self.items.len() {
                IssueKind::TooSmall {
                    origin: SizeOrigin::Array,
                    minimum: self.items.len() as f64,
                    inclusive: true,
                    exact: self.rest.is_none(),
                }
            } else {
                IssueKind::TooBig {
                    origin: SizeOrigin::Array,
                    maximum: self.items.len() as f64,
                    inclusive: true,
                    exact: true,
                }
            };
            record_issue(&ctx, IssueData::new(kind));
            return Outcome::failed().into();
        }

        let mut results = Vec::with_capacity(arr.len());
        for (index, item) in arr.into_iter().enumerate() {
            let schema = self.items.get(index).or(self.rest.as_ref());
            if let Some(schema) = schema {
                results.push(schema.validate(ctx.child_index(index, item)));
            }
        }
        let strip = self
            .rest
            .as_ref()
            .map(|_| Strip::starting_at(self.items.len()).min_length(self.items.len()));

        if ctx.is_async() {
            return MaybeDeferred::deferred(async move {
                let mut tracker = StatusTracker::new();
                merge_array_async(&mut tracker, results, strip)
                    .await
                    .map(Value::Array)
            });
        }

        let resolved = results
            .into_iter()
            .map(|r| r.into_ready().expect("synchronous run"))
            .collect();
        let mut tracker = StatusTracker::new();
        merge_array(&mut tracker, resolved, strip)
            .map(Value::Array)
            .into()
    }
}

pub fn entries_to_value(entries: ObjectEntries<Value>) -> Value {
    let map: Map<String, Value> = entries
        .into_iter()
        .map(|(k, v)| (k, v.unwrap_or(Value::Null)))
        .collect();
    Value::Object(map)
}
