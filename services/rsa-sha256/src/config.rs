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

use serde::Deserialize;

/// How the request url's query string takes part in the signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryParameters {
    /// Sign the OAuth protocol parameters only.
    ///
    /// The query string is left out of the base string, which is what
    /// RSA-SHA256 body-hash verifiers in the wild expect.
    #[default]
    Ignore,
    /// Fold the decoded query pairs into the signed parameters, as RFC 5849
    /// §3.4.1.3 describes.
    Merge,
}

/// Config for the RSA-SHA256 request signer.
///
/// Nothing is read from the environment, build it in code or deserialize it
/// from the caller's own configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Query string handling, `ignore` by default.
    pub query_parameters: QueryParameters,
}
