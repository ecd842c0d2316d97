// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shape synthesis from a validated signature.

use super::{Constructor, FieldSlot, RecordShape, TypeParam, TypeSignature};
use crate::config::TYPE_PARAM_PREFIX;
use std::collections::HashMap;

/// Build the generic shape for `signature` under the already computed `name`.
///
/// Infallible: the signature was validated (non-empty, no duplicates) when
/// it was constructed.
pub(crate) fn generate(signature: &TypeSignature, name: String) -> RecordShape {
    let mutable = signature.is_mutable();
    let names = signature.names();

    let type_params: Vec<TypeParam> = (0..names.len())
        .map(|index| TypeParam {
            index,
            name: format!("{}{}", TYPE_PARAM_PREFIX, index),
        })
        .collect();

    let fields: Vec<FieldSlot> = names
        .iter()
        .zip(&type_params)
        .map(|(field, param)| FieldSlot {
            name: field.clone(),
            param: param.clone(),
            writable: mutable,
        })
        .collect();

    let index: HashMap<String, usize> = names
        .iter()
        .enumerate()
        .map(|(i, field)| (field.clone(), i))
        .collect();

    let labels = names
        .iter()
        .enumerate()
        .map(|(i, field)| {
            if i == 0 {
                format!("{{ {} = ", field)
            } else {
                format!(", {} = ", field)
            }
        })
        .collect();

    RecordShape {
        name,
        digest: signature.digest(),
        mutable,
        fields,
        type_params,
        constructor: Constructor {
            params: names.to_vec(),
        },
        index,
        labels,
    }
}
