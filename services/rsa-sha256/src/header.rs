// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::canonical::percent_encode;
use crate::constants::AUTHORIZATION_SCHEME;
use crate::params::ParameterSet;

/// Serialize a signed parameter set into the `Authorization` header value.
///
/// ```shell
/// OAuth k1="v1",k2="v2"
/// ```
pub fn build_header(params: &ParameterSet) -> String {
    debug_assert!(params.is_signed(), "header built before signing");

    let mut s = String::with_capacity(512);
    s.push_str(AUTHORIZATION_SCHEME);
    s.push(' ');

    for (idx, (k, v)) in params.iter().enumerate() {
        if idx != 0 {
            s.push(',');
        }

        s.push_str(&percent_encode(k.as_str()));
        s.push_str("=\"");
        s.push_str(&percent_encode(v));
        s.push('"');
    }

    s
}
